use behavior_tree::{Behavior, BehaviorGraph, Status};

use crate::context::GoalContext;
use crate::nodes::{ExecutionContext, Var};

/// A goal's behavior graph plus its blackboard and the entered flag.
pub(crate) struct GraphRunner {
    graph: BehaviorGraph<ExecutionContext>,
    exec: ExecutionContext,
    entered: bool,
}

impl GraphRunner {
    pub fn new(name: &'static str, root: Box<dyn Behavior<ExecutionContext>>) -> Self {
        Self {
            graph: BehaviorGraph::new(name, root),
            exec: ExecutionContext::new(),
            entered: false,
        }
    }

    /// Returns false if already entered.
    pub fn enter(&mut self, ctx: &GoalContext<'_>) -> bool {
        if self.entered {
            return false;
        }
        self.entered = true;
        self.exec.vars.clear();
        self.graph.reset();
        self.graph.enable();
        self.refresh(ctx);
        true
    }

    /// Returns false if not entered.
    pub fn exit(&mut self) -> bool {
        if !self.entered {
            return false;
        }
        self.entered = false;
        self.graph.disable();
        self.graph.reset();
        self.exec.vars.clear();
        true
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }

    pub fn refresh(&mut self, ctx: &GoalContext<'_>) {
        self.exec.percepts = ctx.percepts();
    }

    pub fn exec(&self) -> &ExecutionContext {
        &self.exec
    }

    pub fn set(&mut self, key: &'static str, value: Var) {
        self.exec.vars.set(key, value);
    }

    pub fn unset(&mut self, key: &str) {
        self.exec.vars.remove(key);
    }

    /// Ticks the graph and forwards whatever it issued.
    pub fn tick(&mut self, ctx: &mut GoalContext<'_>) -> Option<Status> {
        let status = self.graph.tick(&mut self.exec);
        ctx.commands.extend(self.exec.take_commands());
        status
    }
}
