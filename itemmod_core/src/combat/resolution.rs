//! Hit and turn resolution - run item mod hooks for one combat exchange

use super::dispatch::{
    fold_before_receive_damage, notify_damage_dealt, notify_damage_received, offer_battle_turn,
};
use super::result::{HitResult, TurnResult};
use super::unit::{AttackProfile, CombatUnit};
use rand::RngCore;
use tracing::{debug, trace};

/// Resolve a single hit from `attacker` against `target` (immutable API)
///
/// Returns the new attacker and target state plus the hit result. This is the
/// main combat entry point:
/// 1. Chains the target's `before_receive_damage` hooks in attachment order
/// 2. Clamps the result to the target's remaining life and deducts it
/// 3. Notifies the attacker's mods (`on_damage_dealt`) and then the target's
///    mods (`on_damage_received`) with the clamped value
pub fn resolve_hit(
    attacker: &CombatUnit,
    target: &CombatUnit,
    raw_damage: f64,
) -> (CombatUnit, CombatUnit, HitResult) {
    let mut rng = rand::thread_rng();
    resolve_hit_with_rng(attacker, target, raw_damage, &mut rng)
}

/// Resolve a hit with a provided RNG (for deterministic testing)
pub fn resolve_hit_with_rng(
    attacker: &CombatUnit,
    target: &CombatUnit,
    raw_damage: f64,
    rng: &mut dyn RngCore,
) -> (CombatUnit, CombatUnit, HitResult) {
    let mut new_attacker = attacker.clone();
    let mut new_target = target.clone();
    let mut result = HitResult::new(raw_damage);

    // Store initial state
    result.target_life_before = target.current_life;
    result.attacker_life_before = attacker.current_life;

    // Step 1: Pre-damage mods on the target
    result.modified_damage = fold_before_receive_damage(target.mods(), attacker, target, raw_damage);

    // Step 2: Apply, clamped to remaining life
    result.damage_dealt = new_target.take_damage(result.modified_damage);

    // Step 3: Post-damage notifications
    // Hooks are read from the original units; only the new state is mutated.
    notify_damage_dealt(attacker.mods(), &mut new_attacker, &mut new_target, result.damage_dealt, rng);
    notify_damage_received(target.mods(), &mut new_attacker, &mut new_target, result.damage_dealt, rng);

    // Store final state
    result.target_life_after = new_target.current_life;
    result.attacker_life_after = new_attacker.current_life;
    result.is_killing_blow = target.is_alive() && !new_target.is_alive();

    trace!(
        attacker = %attacker.id,
        target = %target.id,
        raw = raw_damage,
        modified = result.modified_damage,
        dealt = result.damage_dealt,
        "hit resolved"
    );

    (new_attacker, new_target, result)
}

/// Start the attacker's turn
///
/// Resets the attack to a single projectile, then offers each attached mod
/// the chance to modify it. At most one mod's modification takes effect.
pub fn start_turn(attacker: &CombatUnit) -> (CombatUnit, TurnResult) {
    let mut new_attacker = attacker.clone();
    new_attacker.attack = AttackProfile::default();

    let modified_by = offer_battle_turn(attacker.mods(), &mut new_attacker);
    let modifier = modified_by
        .and_then(|index| attacker.mods().nth(index))
        .map(|m| m.effect_type());

    if let (Some(index), Some(modifier)) = (modified_by, modifier) {
        debug!(
            unit = %attacker.id,
            index,
            %modifier,
            projectiles = new_attacker.attack.projectiles,
            "attack modified"
        );
    }

    let result = TurnResult {
        projectiles: new_attacker.attack.projectiles,
        modified_by,
        modifier,
    };
    (new_attacker, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::Item;
    use crate::effect::Effect;
    use crate::types::{EffectType, EquipmentSlot};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn unit_with(id: &str, life: f64, slot: EquipmentSlot, mods: Vec<Effect>) -> CombatUnit {
        let mut unit = CombatUnit::new(id, life, 10.0);
        let mut item = Item::new(format!("{id}_item"), "Test Item");
        item.mods = mods;
        unit.equip(slot, item);
        unit
    }

    #[test]
    fn test_basic_hit() {
        let attacker = CombatUnit::new("attacker", 100.0, 10.0);
        let target = CombatUnit::new("target", 100.0, 10.0);

        let (new_attacker, new_target, result) = resolve_hit(&attacker, &target, 30.0);

        assert!((result.damage_dealt - 30.0).abs() < f64::EPSILON);
        assert!((new_target.current_life - 70.0).abs() < f64::EPSILON);
        assert!((new_attacker.current_life - 100.0).abs() < f64::EPSILON);
        assert!(!result.is_killing_blow);
        // inputs untouched
        assert!((target.current_life - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reduce_damage_chain() {
        let attacker = CombatUnit::new("attacker", 100.0, 10.0);
        let target = unit_with(
            "target",
            100.0,
            EquipmentSlot::BodyArmour,
            vec![Effect::reduce_damage(3.0).unwrap(), Effect::reduce_damage(2.0).unwrap()],
        );

        let (_, new_target, result) = resolve_hit(&attacker, &target, 10.0);

        assert!((result.modified_damage - 5.0).abs() < f64::EPSILON);
        assert!((new_target.current_life - 95.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_post_damage_hooks_see_clamped_damage() {
        // Guaranteed full leech: attacker heals exactly the damage dealt
        let mut attacker = unit_with(
            "attacker",
            200.0,
            EquipmentSlot::MainHand,
            vec![Effect::life_leech(1.0, 1.0).unwrap()],
        );
        attacker.current_life = 100.0;
        let mut target = CombatUnit::new("target", 100.0, 10.0);
        target.current_life = 40.0;
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        let (new_attacker, new_target, result) =
            resolve_hit_with_rng(&attacker, &target, 100.0, &mut rng);

        assert!((result.modified_damage - 100.0).abs() < f64::EPSILON);
        assert!((result.damage_dealt - 40.0).abs() < f64::EPSILON);
        assert!((new_attacker.current_life - 140.0).abs() < f64::EPSILON);
        assert_eq!(new_target.current_life, 0.0);
        assert!(result.is_killing_blow);
    }

    #[test]
    fn test_thorns_hurt_attacker() {
        let attacker = CombatUnit::new("attacker", 100.0, 10.0);
        let target = unit_with(
            "target",
            100.0,
            EquipmentSlot::Helmet,
            vec![Effect::thorns(7.0).unwrap()],
        );
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let (new_attacker, _, result) = resolve_hit_with_rng(&attacker, &target, 20.0, &mut rng);

        assert!((new_attacker.current_life - 93.0).abs() < f64::EPSILON);
        assert!((result.attacker_life_change() + 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_on_dead_target_deals_nothing() {
        let attacker = CombatUnit::new("attacker", 100.0, 10.0);
        let mut target = CombatUnit::new("target", 100.0, 10.0);
        target.current_life = 0.0;

        let (_, _, result) = resolve_hit(&attacker, &target, 50.0);

        assert_eq!(result.damage_dealt, 0.0);
        assert!(!result.is_killing_blow);
    }

    #[test]
    fn test_turn_start_first_projectile_mod_wins() {
        let attacker = unit_with(
            "archer",
            100.0,
            EquipmentSlot::MainHand,
            vec![
                Effect::multiple_projectiles(3).unwrap(),
                Effect::multiple_projectiles(5).unwrap(),
            ],
        );

        let (new_attacker, result) = start_turn(&attacker);

        assert_eq!(result.projectiles, 3);
        assert_eq!(result.modified_by, Some(0));
        assert_eq!(result.modifier, Some(EffectType::MultipleProjectiles));
        assert_eq!(new_attacker.attack.projectiles, 3);
    }

    #[test]
    fn test_turn_start_resets_attack() {
        let mut attacker = CombatUnit::new("plain", 100.0, 10.0);
        attacker.attack.projectiles = 4;

        let (new_attacker, result) = start_turn(&attacker);

        assert_eq!(new_attacker.attack.projectiles, 1);
        assert!(!result.was_modified());
        assert_eq!(result.modifier, None);
    }
}
