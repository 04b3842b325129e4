//! How much a pickup would help the agent right now.

use arena_core::{CombatantStatus, Meter, PickupKind};

/// Blend of "how much it restores" and "how much I need it", in `[0, 1]`.
fn restore_value(meter: &Meter, amount: f32, need_weight: f32) -> f32 {
    if meter.max <= 0.0 {
        return 0.0;
    }
    let missing = meter.missing();
    let recoverable = amount.max(0.0).min(missing);
    let value = (1.0 - need_weight) * (recoverable / meter.max) + need_weight * (missing / meter.max);
    value.clamp(0.0, 1.0)
}

/// Value of collecting a pickup of `kind` given the agent's current state.
///
/// Ammo pickups average over the agent's active guns; a gun without an
/// entry in the refill table gains nothing but still counts its need.
pub fn pickup_value(kind: &PickupKind, status: &CombatantStatus, need_weight: f32) -> f32 {
    match kind {
        PickupKind::Health { amount } => restore_value(&status.health, *amount, need_weight),
        PickupKind::Ammo { refill } => {
            let (sum, count) = status
                .active_guns()
                .map(|(slot, gun)| {
                    let amount = refill.get(slot).copied().unwrap_or(0.0);
                    restore_value(&gun.ammo, amount, need_weight)
                })
                .fold((0.0, 0_usize), |(sum, n), v| (sum + v, n + 1));
            if count == 0 { 0.0 } else { sum / count as f32 }
        }
    }
}

#[cfg(test)]
mod tests {
    use arena_core::{EntityId, GunState, Transform};

    use super::*;

    fn status(health: f32, ammo: &[(f32, bool)]) -> CombatantStatus {
        CombatantStatus {
            id: EntityId(1),
            transform: Transform::default(),
            health: Meter::new(health, 100.0),
            guns: ammo
                .iter()
                .map(|&(current, active)| GunState::new(Meter::new(current, 50.0), active))
                .collect(),
            speed: 5.0,
            alive: true,
        }
    }

    #[test]
    fn full_health_values_nothing() {
        let kind = PickupKind::Health { amount: 25.0 };
        assert_eq!(pickup_value(&kind, &status(100.0, &[]), 0.8), 0.0);
    }

    #[test]
    fn health_blends_recovery_and_need() {
        let kind = PickupKind::Health { amount: 25.0 };
        // missing 60: 0.2 * 0.25 + 0.8 * 0.6
        let value = pickup_value(&kind, &status(40.0, &[]), 0.8);
        assert!((value - 0.53).abs() < 1e-5);
    }

    #[test]
    fn ammo_averages_over_active_guns() {
        let kind = PickupKind::Ammo {
            refill: vec![50.0, 50.0, 50.0],
        };
        // Gun 0 empty (1.0), gun 1 full (0.0), gun 2 inactive.
        let value = pickup_value(&kind, &status(100.0, &[(0.0, true), (50.0, true), (0.0, false)]), 0.8);
        assert!((value - 0.5).abs() < 1e-6);
    }

    #[test]
    fn ammo_without_guns_is_worthless() {
        let kind = PickupKind::Ammo { refill: vec![10.0] };
        assert_eq!(pickup_value(&kind, &status(100.0, &[(0.0, false)]), 0.8), 0.0);
    }
}
