use proptest::prelude::*;
use wollok_natives::native_for;
use wollok_runtime::{fqn, Evaluation, InnerValue, NativeError, ObjectId};

fn setup_running_game(eval: &mut Evaluation) -> ObjectId {
    let game = eval.create_instance(fqn::GAME, None);
    let true_id = eval.true_id();
    eval.instance_mut(game).unwrap().set("running", true_id);
    game
}

proptest! {
    #[test]
    fn volume_outside_zero_one_is_always_a_range_error(n in -10.0f64..10.0f64) {
        let mut eval = Evaluation::new();
        let sound = eval.create_instance(fqn::SOUND, None);
        let value = eval.create_instance(fqn::NUMBER, Some(InnerValue::Number(n)));
        let volume = native_for(fqn::SOUND, "volume").unwrap();

        let result = eval.call_native(volume, sound, &[value]);
        if (0.0..=1.0).contains(&n) {
            prop_assert!(result.is_ok());
        } else {
            prop_assert!(matches!(result, Err(NativeError::RangeError(_))));
        }
    }
}

#[test]
fn playing_an_already_played_sound_is_a_state_error() {
    let mut eval = Evaluation::new();
    setup_running_game(&mut eval);
    let sound = eval.create_instance(fqn::SOUND, None);
    let play = native_for(fqn::SOUND, "play").unwrap();

    eval.call_native(play, sound, &[]).unwrap();
    let err = eval.call_native(play, sound, &[]).unwrap_err();
    assert!(matches!(err, NativeError::StateError(_)));
}

#[test]
fn resuming_a_sound_that_was_never_paused_is_a_state_error() {
    let mut eval = Evaluation::new();
    setup_running_game(&mut eval);
    let sound = eval.create_instance(fqn::SOUND, None);
    let resume = native_for(fqn::SOUND, "resume").unwrap();

    let err = eval.call_native(resume, sound, &[]).unwrap_err();
    assert!(matches!(err, NativeError::StateError(_)));
}

#[test]
fn sound_play_requires_the_game_to_be_running() {
    let mut eval = Evaluation::new();
    let game = eval.create_instance(fqn::GAME, None);
    let false_id = eval.false_id();
    eval.instance_mut(game).unwrap().set("running", false_id);
    let sound = eval.create_instance(fqn::SOUND, None);

    let play = native_for(fqn::SOUND, "play").unwrap();
    let err = eval.call_native(play, sound, &[]).unwrap_err();
    assert!(matches!(err, NativeError::StateError(_)));
}

#[test]
fn sound_play_then_stop_round_trips_through_game_sounds() {
    let mut eval = Evaluation::new();
    let game = setup_running_game(&mut eval);
    let sound = eval.create_instance(fqn::SOUND, None);

    let play = native_for(fqn::SOUND, "play").unwrap();
    eval.call_native(play, sound, &[]).unwrap();

    let played = native_for(fqn::SOUND, "played").unwrap();
    assert_eq!(eval.call_native(played, sound, &[]).unwrap(), eval.true_id());

    let sounds = eval.instance(game).unwrap().get("sounds").unwrap();
    assert_eq!(eval.instance(sounds).unwrap().assert_is_collection().unwrap(), &[sound]);

    let stop = native_for(fqn::SOUND, "stop").unwrap();
    eval.call_native(stop, sound, &[]).unwrap();

    let sounds = eval.instance(game).unwrap().get("sounds").unwrap();
    assert!(eval.instance(sounds).unwrap().assert_is_collection().unwrap().is_empty());

    let pause = native_for(fqn::SOUND, "pause").unwrap();
    let err = eval.call_native(pause, sound, &[]).unwrap_err();
    assert!(matches!(err, NativeError::StateError(_)));
}

#[test]
fn sound_pause_then_resume_round_trips() {
    let mut eval = Evaluation::new();
    setup_running_game(&mut eval);
    let sound = eval.create_instance(fqn::SOUND, None);

    let play = native_for(fqn::SOUND, "play").unwrap();
    eval.call_native(play, sound, &[]).unwrap();

    let pause = native_for(fqn::SOUND, "pause").unwrap();
    eval.call_native(pause, sound, &[]).unwrap();
    let paused = native_for(fqn::SOUND, "paused").unwrap();
    assert_eq!(eval.call_native(paused, sound, &[]).unwrap(), eval.true_id());

    let resume = native_for(fqn::SOUND, "resume").unwrap();
    eval.call_native(resume, sound, &[]).unwrap();
    let played = native_for(fqn::SOUND, "played").unwrap();
    assert_eq!(eval.call_native(played, sound, &[]).unwrap(), eval.true_id());
}
