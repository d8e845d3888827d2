//! Property tests for battle invariants.
//!
//! Random action sequences are thrown at a live engine and the bounds that
//! must hold after every operation are checked.

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

use quiz_battle::cards::{CardEconomy, Element, Role};
use quiz_battle::catalog::Catalog;
use quiz_battle::combat::{is_superior, resolve};
use quiz_battle::core::{BattleConfig, GameRng};
use quiz_battle::session::{BattleEngine, Session, Stage};

#[derive(Clone, Debug)]
enum Op {
    Answer(bool),
    Play(usize),
    Skill,
    Wait(u64),
}

fn any_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<bool>().prop_map(Op::Answer),
        2 => (0usize..4).prop_map(Op::Play),
        1 => Just(Op::Skill),
        2 => (0u64..2500).prop_map(Op::Wait),
    ]
}

fn any_role() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::Warrior), Just(Role::Mage)]
}

fn any_element() -> impl Strategy<Value = Element> {
    prop_oneof![
        Just(Element::Physical),
        Just(Element::Fire),
        Just(Element::Water),
        Just(Element::Nature),
        Just(Element::Light),
        Just(Element::Dark),
        Just(Element::Heal),
    ]
}

fn check_bounds(session: &Session, config: &BattleConfig) -> Result<(), TestCaseError> {
    if session.stage == Stage::Playing {
        prop_assert_eq!(session.hand.len(), config.hand_size);
    }
    prop_assert!(session.current_energy <= session.max_energy);
    prop_assert!(session.player_health <= session.max_player_health);
    prop_assert!(session.player_armor <= session.max_armor);
    prop_assert!(session.monster_health <= session.max_monster_health);
    prop_assert!(session.monster_rage < config.rage_threshold);
    prop_assert!(session.hero_skill_cooldown <= config.hero_skill_cooldown_secs);
    Ok(())
}

proptest! {
    #[test]
    fn prop_session_bounds_hold(
        seed in any::<u64>(),
        role in any_role(),
        ops in prop::collection::vec(any_op(), 0..150)
    ) {
        let mut engine = BattleEngine::standard(seed);
        engine.start_game(role);

        for op in ops {
            match op {
                Op::Answer(correct) => {
                    engine.answer_question(correct);
                }
                Op::Play(slot) => {
                    let id = engine.session().hand.cards().get(slot).map(|c| c.id);
                    if let Some(id) = id {
                        engine.play_card(id);
                    }
                }
                Op::Skill => {
                    engine.activate_hero_skill();
                }
                Op::Wait(ms) => engine.advance_time(ms),
            }
            check_bounds(engine.session(), engine.config())?;

            let stage = engine.session().stage;
            if stage == Stage::LevelTransition {
                engine.advance_to_next_level();
            } else if stage.is_terminal() {
                prop_assert!(!engine.is_ticking());
                engine.restart();
                engine.start_game(role);
            }
            check_bounds(engine.session(), engine.config())?;
        }
    }

    #[test]
    fn prop_score_and_cursor_never_decrease(
        seed in any::<u64>(),
        ops in prop::collection::vec(any_op(), 0..100)
    ) {
        let config = BattleConfig::default().with_basic_attack_damage(0);
        let mut engine = BattleEngine::new(config, Catalog::standard(), seed);
        engine.start_game(Role::Warrior);

        for op in ops {
            let before = engine.snapshot();
            match op {
                Op::Answer(correct) => {
                    engine.answer_question(correct);
                }
                Op::Wait(ms) => engine.advance_time(ms),
                _ => {}
            }
            let after = engine.session();
            if after.stage.is_terminal() {
                break;
            }
            prop_assert!(after.score >= before.score);
            prop_assert!(after.question_index >= before.question_index);
            prop_assert!(after.knowledge_collected.len() >= before.knowledge_collected.len());
        }
    }

    #[test]
    fn prop_one_mistake_resets_any_combo(streak in 0usize..60, seed in any::<u64>()) {
        let config = BattleConfig::default().with_basic_attack_damage(0);
        let mut engine = BattleEngine::new(config, Catalog::standard(), seed);
        engine.start_game(Role::Mage);

        for _ in 0..streak {
            engine.answer_question(true);
        }
        prop_assert_eq!(engine.session().combo_count as usize, streak);

        engine.answer_question(false);
        prop_assert_eq!(engine.session().combo_count, 0);
    }

    #[test]
    fn prop_rage_is_the_only_path_to_health_loss(mistakes in 1usize..12) {
        let config = BattleConfig::default().with_max_player_health(20);
        let threshold = config.rage_threshold;
        let per_mistake = config.rage_per_mistake;
        let mut engine = BattleEngine::new(config, Catalog::standard(), 3);
        engine.start_game(Role::Warrior);

        for _ in 0..mistakes {
            let before = engine.snapshot();
            engine.answer_question(false);
            let after = engine.session();

            if before.monster_rage + per_mistake >= threshold {
                prop_assert_eq!(after.monster_rage, 0);
                prop_assert_eq!(after.player_health, before.player_health - 1);
            } else {
                prop_assert_eq!(after.monster_rage, before.monster_rage + per_mistake);
                prop_assert_eq!(after.player_health, before.player_health);
            }
            engine.advance_time(1500);
        }
    }

    #[test]
    fn prop_damage_is_ceiling_of_multiplier(
        attack in any_element(),
        defender in any_element(),
        base in 0u32..10_000
    ) {
        let multiplier = if attack == Element::Heal {
            0.0
        } else if attack == defender {
            0.5
        } else if is_superior(attack, defender) {
            1.5
        } else {
            1.0
        };
        let expected = (f64::from(base) * multiplier).ceil() as u32;

        prop_assert_eq!(resolve(attack, defender, base).final_damage, expected);
    }

    #[test]
    fn prop_conveyor_keeps_hand_size(
        seed in any::<u64>(),
        role in any_role(),
        plays in prop::collection::vec(0usize..4, 0..60)
    ) {
        let pool = Catalog::standard().cards().pool_for(role);
        let mut economy = CardEconomy::new();
        let mut rng = GameRng::new(seed);
        let mut hand = economy.initialize_hand(&pool, 4, &mut rng);

        for slot in plays {
            let id = hand.cards()[slot].id;
            let used = economy.use_card(&mut hand, id, &pool, &mut rng);

            prop_assert!(used.is_some());
            prop_assert_eq!(hand.len(), 4);
            prop_assert!(!hand.contains(id));
            prop_assert!(hand.iter().all(|c| c.card.allows(role)));
        }
    }
}
