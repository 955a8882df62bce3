use wollok_natives::{native_for, visual_native};
use wollok_runtime::{fqn, Evaluation, InnerValue, NativeError, ObjectId};

fn make_position(eval: &mut Evaluation, x: ObjectId, y: ObjectId) -> ObjectId {
    let position = eval.create_instance("wollok.game.Position", None);
    eval.instance_mut(position).unwrap().set("x", x);
    eval.instance_mut(position).unwrap().set("y", y);
    position
}

fn make_number(eval: &mut Evaluation, n: f64) -> ObjectId {
    eval.create_instance(fqn::NUMBER, Some(InnerValue::Number(n)))
}

fn make_visual(eval: &mut Evaluation, x: f64, y: f64) -> ObjectId {
    let visual = eval.create_instance("test.Visual", None);
    let nx = make_number(eval, x);
    let ny = make_number(eval, y);
    let position = make_position(eval, nx, ny);
    eval.instance_mut(visual).unwrap().set("position", position);
    visual
}

#[test]
fn native_for_resolves_every_catalogued_game_selector() {
    let selectors = [
        "addVisual", "addVisualIn", "addVisualCharacter", "addVisualCharacterIn", "whenCollideDo", "onCollideDo",
        "onTick", "schedule", "whenKeyPressedDo", "removeTickEvent", "removeVisual", "allVisuals", "hasVisual",
        "getObjectsIn", "colliders", "say", "clear", "title", "width", "height", "ground", "boardGround",
        "doCellSize", "errorReporter", "hideAttributes", "showAttributes", "stop", "doStart",
    ];
    for selector in selectors {
        assert!(native_for(fqn::GAME, selector).is_some(), "missing native for game.{selector}");
    }
}

#[test]
fn native_for_is_none_for_an_unknown_module() {
    assert!(native_for("wollok.lang.Object", "anything").is_none());
}

#[test]
fn add_visual_appends_and_rejects_duplicates() {
    let mut eval = Evaluation::new();
    let game = eval.create_instance(fqn::GAME, None);
    let visual = make_visual(&mut eval, 0.0, 0.0);

    let add_visual = native_for(fqn::GAME, "addVisual").unwrap();
    eval.call_native(add_visual, game, &[visual]).unwrap();

    let visuals = eval.instance(game).unwrap().get("visuals").unwrap();
    assert_eq!(eval.instance(visuals).unwrap().assert_is_collection().unwrap(), &[visual]);

    let err = eval.call_native(add_visual, game, &[visual]).unwrap_err();
    assert!(matches!(err, NativeError::TypeError(_)));
}

#[test]
fn add_visual_rejects_a_null_visual() {
    let mut eval = Evaluation::new();
    let game = eval.create_instance(fqn::GAME, None);
    let null = eval.null_id();

    let add_visual = native_for(fqn::GAME, "addVisual").unwrap();
    let err = eval.call_native(add_visual, game, &[null]).unwrap_err();
    assert!(matches!(err, NativeError::TypeError(_)));
}

#[test]
fn has_visual_and_remove_visual_round_trip() {
    let mut eval = Evaluation::new();
    let game = eval.create_instance(fqn::GAME, None);
    let visual = make_visual(&mut eval, 1.0, 1.0);

    let add_visual = native_for(fqn::GAME, "addVisual").unwrap();
    eval.call_native(add_visual, game, &[visual]).unwrap();

    let has_visual = native_for(fqn::GAME, "hasVisual").unwrap();
    let present = eval.call_native(has_visual, game, &[visual]).unwrap();
    assert_eq!(present, eval.true_id());

    let remove_visual = native_for(fqn::GAME, "removeVisual").unwrap();
    eval.call_native(remove_visual, game, &[visual]).unwrap();

    let present = eval.call_native(has_visual, game, &[visual]).unwrap();
    assert_eq!(present, eval.false_id());
}

#[test]
fn get_objects_in_matches_by_position_attribute_ids() {
    let mut eval = Evaluation::new();
    let game = eval.create_instance(fqn::GAME, None);
    let here = make_visual(&mut eval, 3.0, 4.0);
    let elsewhere = make_visual(&mut eval, 5.0, 6.0);

    let add_visual = native_for(fqn::GAME, "addVisual").unwrap();
    eval.call_native(add_visual, game, &[here]).unwrap();
    eval.call_native(add_visual, game, &[elsewhere]).unwrap();

    let target = eval.instance(here).unwrap().get("position").unwrap();
    let get_objects_in = native_for(fqn::GAME, "getObjectsIn").unwrap();
    let result = eval.call_native(get_objects_in, game, &[target]).unwrap();
    assert_eq!(eval.instance(result).unwrap().assert_is_collection().unwrap(), &[here]);
}

#[test]
fn colliders_excludes_the_queried_visual_itself() {
    let mut eval = Evaluation::new();
    let game = eval.create_instance(fqn::GAME, None);
    let a = make_visual(&mut eval, 2.0, 2.0);
    let b = make_visual(&mut eval, 2.0, 2.0);
    let c = make_visual(&mut eval, 9.0, 9.0);

    let add_visual = native_for(fqn::GAME, "addVisual").unwrap();
    for visual in [a, b, c] {
        eval.call_native(add_visual, game, &[visual]).unwrap();
    }

    let colliders = native_for(fqn::GAME, "colliders").unwrap();
    let result = eval.call_native(colliders, game, &[a]).unwrap();
    assert_eq!(eval.instance(result).unwrap().assert_is_collection().unwrap(), &[b]);
}

#[test]
fn stop_and_do_start_flip_running() {
    let mut eval = Evaluation::new();
    let game = eval.create_instance(fqn::GAME, None);

    let do_start = native_for(fqn::GAME, "doStart").unwrap();
    let flag = eval.false_id();
    eval.call_native(do_start, game, &[flag]).unwrap();
    assert_eq!(eval.instance(game).unwrap().get("running"), Some(eval.true_id()));

    let stop = native_for(fqn::GAME, "stop").unwrap();
    eval.call_native(stop, game, &[]).unwrap();
    assert_eq!(eval.instance(game).unwrap().get("running"), Some(eval.false_id()));
}

#[test]
fn width_is_a_getter_when_called_with_no_arguments_and_a_setter_otherwise() {
    let mut eval = Evaluation::new();
    let game = eval.create_instance(fqn::GAME, None);
    let width = native_for(fqn::GAME, "width").unwrap();

    let unset = eval.call_native(width, game, &[]).unwrap();
    assert_eq!(unset, eval.null_id());

    let value = make_number(&mut eval, 10.0);
    let set_result = eval.call_native(width, game, &[value]).unwrap();
    assert_eq!(set_result, eval.void_id());

    let got = eval.call_native(width, game, &[]).unwrap();
    assert_eq!(got, value);
}

#[test]
fn say_sets_message_and_schedules_message_time_from_io_current_time() {
    let mut eval = Evaluation::new();
    let io = eval.create_instance(fqn::IO, None);
    let now = make_number(&mut eval, 1_000.0);
    eval.instance_mut(io).unwrap().set("currentTime", now);
    eval.set_dispatcher(std::rc::Rc::new(|eval: &mut Evaluation, selector: &str, receiver, _args: &[ObjectId]| {
        let value = eval.instance(receiver).and_then(|o| o.get(selector)).unwrap_or_else(|| eval.void_id());
        eval.current_frame().push(value);
        Ok(())
    }));

    let game = eval.create_instance(fqn::GAME, None);
    let visual = make_visual(&mut eval, 0.0, 0.0);
    let message = eval.create_instance(fqn::STRING, Some(InnerValue::String("hi".into())));

    let say = native_for(fqn::GAME, "say").unwrap();
    eval.call_native(say, game, &[visual, message]).unwrap();

    assert_eq!(eval.instance(visual).unwrap().get("message"), Some(message));
    let message_time = eval.instance(visual).unwrap().get("messageTime").unwrap();
    assert_eq!(eval.instance(message_time).unwrap().assert_is_number().unwrap(), 3_000.0);
}

#[test]
fn same_position_compares_x_and_y_attribute_ids() {
    let mut eval = Evaluation::new();
    let a = make_visual(&mut eval, 1.0, 1.0);
    let b = make_visual(&mut eval, 1.0, 1.0);
    let c = make_visual(&mut eval, 2.0, 1.0);

    let same_position = visual_native("samePosition").unwrap();
    assert_eq!(eval.call_native(same_position, a, &[b]).unwrap(), eval.true_id());
    assert_eq!(eval.call_native(same_position, a, &[c]).unwrap(), eval.false_id());
}
