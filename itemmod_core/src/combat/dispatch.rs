//! Hook dispatch over a list of item mods
//!
//! These are the building blocks of [`super::resolve_hit_with_rng`] and
//! [`super::start_turn`]. They take mods in attachment order and work with
//! any [`ItemMod`], not just the built-in [`crate::Effect`] set.

use super::unit::CombatUnit;
use crate::effect::ItemMod;
use rand::RngCore;

/// Chain `before_receive_damage` over the target's mods, each seeing the
/// previous mod's output
pub fn fold_before_receive_damage<'a, M>(
    mods: impl IntoIterator<Item = &'a M>,
    attacker: &CombatUnit,
    target: &CombatUnit,
    damage: f64,
) -> f64
where
    M: ItemMod + ?Sized + 'a,
{
    mods.into_iter()
        .fold(damage, |damage, m| m.before_receive_damage(attacker, target, damage))
}

/// Dispatch `on_damage_dealt` to every attacker mod
pub fn notify_damage_dealt<'a, M>(
    mods: impl IntoIterator<Item = &'a M>,
    attacker: &mut CombatUnit,
    target: &mut CombatUnit,
    damage_dealt: f64,
    rng: &mut dyn RngCore,
) where
    M: ItemMod + ?Sized + 'a,
{
    for m in mods {
        m.on_damage_dealt(attacker, target, damage_dealt, rng);
    }
}

/// Dispatch `on_damage_received` to every target mod
pub fn notify_damage_received<'a, M>(
    mods: impl IntoIterator<Item = &'a M>,
    attacker: &mut CombatUnit,
    target: &mut CombatUnit,
    damage_dealt: f64,
    rng: &mut dyn RngCore,
) where
    M: ItemMod + ?Sized + 'a,
{
    for m in mods {
        m.on_damage_received(attacker, target, damage_dealt, rng);
    }
}

/// Offer each mod the chance to modify the attack, in attachment order
///
/// Stops at the first mod whose attempt takes effect and returns its index.
/// Mods after it are not invoked this turn.
pub fn offer_battle_turn<'a, M>(
    mods: impl IntoIterator<Item = &'a M>,
    attacker: &mut CombatUnit,
) -> Option<usize>
where
    M: ItemMod + ?Sized + 'a,
{
    mods.into_iter()
        .position(|m| m.on_battle_turn(attacker))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::cell::{Cell, RefCell};

    /// Test mod that records every hook call
    #[derive(Default)]
    struct Recorder {
        turn_result: bool,
        turn_calls: Cell<u32>,
        add: f64,
        multiply: f64,
        dealt_seen: RefCell<Vec<f64>>,
        received_seen: RefCell<Vec<f64>>,
    }

    impl Recorder {
        fn turn(result: bool) -> Self {
            Recorder {
                turn_result: result,
                multiply: 1.0,
                ..Default::default()
            }
        }

        fn transform(add: f64, multiply: f64) -> Self {
            Recorder {
                add,
                multiply,
                ..Default::default()
            }
        }
    }

    impl ItemMod for Recorder {
        fn before_receive_damage(&self, _: &CombatUnit, _: &CombatUnit, damage: f64) -> f64 {
            (damage + self.add) * self.multiply
        }

        fn on_damage_dealt(&self, _: &mut CombatUnit, _: &mut CombatUnit, dealt: f64, _: &mut dyn RngCore) {
            self.dealt_seen.borrow_mut().push(dealt);
        }

        fn on_damage_received(&self, _: &mut CombatUnit, _: &mut CombatUnit, dealt: f64, _: &mut dyn RngCore) {
            self.received_seen.borrow_mut().push(dealt);
        }

        fn on_battle_turn(&self, _: &mut CombatUnit) -> bool {
            self.turn_calls.set(self.turn_calls.get() + 1);
            self.turn_result
        }

        fn description(&self) -> String {
            "recorder".to_string()
        }
    }

    fn units() -> (CombatUnit, CombatUnit) {
        (CombatUnit::new("a", 100.0, 10.0), CombatUnit::new("t", 100.0, 10.0))
    }

    #[test]
    fn test_only_first_successful_attempt_runs() {
        let mods = [Recorder::turn(true), Recorder::turn(true), Recorder::turn(true)];
        let (mut attacker, _) = units();

        let modified_by = offer_battle_turn(&mods, &mut attacker);

        assert_eq!(modified_by, Some(0));
        assert_eq!(mods[0].turn_calls.get(), 1);
        assert_eq!(mods[1].turn_calls.get(), 0);
        assert_eq!(mods[2].turn_calls.get(), 0);
    }

    #[test]
    fn test_failed_attempts_pass_the_turn_on() {
        let mods = [Recorder::turn(false), Recorder::turn(true), Recorder::turn(true)];
        let (mut attacker, _) = units();

        assert_eq!(offer_battle_turn(&mods, &mut attacker), Some(1));
        assert_eq!(mods[0].turn_calls.get(), 1);
        assert_eq!(mods[1].turn_calls.get(), 1);
        assert_eq!(mods[2].turn_calls.get(), 0);
    }

    #[test]
    fn test_no_attempt_succeeds() {
        let mods = [Recorder::turn(false), Recorder::turn(false)];
        let (mut attacker, _) = units();

        assert_eq!(offer_battle_turn(&mods, &mut attacker), None);
        assert!(mods.iter().all(|m| m.turn_calls.get() == 1));
    }

    #[test]
    fn test_fold_is_ordered() {
        let (attacker, target) = units();
        let e1 = Recorder::transform(10.0, 1.0);
        let e2 = Recorder::transform(0.0, 2.0);

        let forward = fold_before_receive_damage([&e1, &e2], &attacker, &target, 5.0);
        let backward = fold_before_receive_damage([&e2, &e1], &attacker, &target, 5.0);

        // e2(e1(5)) = (5 + 10) * 2
        assert!((forward - 30.0).abs() < f64::EPSILON);
        // e1(e2(5)) = 5 * 2 + 10
        assert!((backward - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fold_without_mods_is_identity() {
        let (attacker, target) = units();
        let none: [Recorder; 0] = [];
        assert_eq!(fold_before_receive_damage(&none, &attacker, &target, 17.0), 17.0);
    }

    #[test]
    fn test_notifications_reach_every_mod() {
        let mods = [Recorder::turn(false), Recorder::turn(false)];
        let (mut attacker, mut target) = units();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        notify_damage_dealt(&mods, &mut attacker, &mut target, 12.0, &mut rng);
        notify_damage_received(&mods, &mut attacker, &mut target, 12.0, &mut rng);

        for m in &mods {
            assert_eq!(*m.dealt_seen.borrow(), vec![12.0]);
            assert_eq!(*m.received_seen.borrow(), vec![12.0]);
        }
    }

    #[test]
    fn test_dispatch_through_trait_objects() {
        let a = Recorder::turn(false);
        let b = Recorder::turn(true);
        let mods: Vec<&dyn ItemMod> = vec![&a, &b];
        let (mut attacker, _) = units();

        assert_eq!(offer_battle_turn(mods.iter().copied(), &mut attacker), Some(1));
    }
}
