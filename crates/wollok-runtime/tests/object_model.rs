use proptest::prelude::*;
use wollok_runtime::{fqn, Evaluation, InnerValue};

proptest! {
    #[test]
    fn set_then_get_always_round_trips(attr in "[a-z]{1,8}", n in -1_000.0f64..1_000.0f64) {
        let mut eval = Evaluation::new();
        let value = eval.create_instance(fqn::NUMBER, Some(InnerValue::Number(n)));
        let holder = eval.create_instance("test.Holder", None);
        eval.instance_mut(holder).unwrap().set(attr.as_str(), value);
        prop_assert_eq!(eval.instance(holder).unwrap().get(attr.as_str()), Some(value));
    }

    #[test]
    fn create_instance_ids_are_always_distinct(count in 1usize..50) {
        let mut eval = Evaluation::new();
        let mut ids = std::collections::HashSet::new();
        for _ in 0..count {
            let id = eval.create_instance(fqn::NULL, None);
            prop_assert!(ids.insert(id));
        }
    }
}

#[test]
fn the_four_sentinels_are_allocated_and_stable_across_the_evaluations_lifetime() {
    let eval = Evaluation::new();
    let first = (eval.true_id(), eval.false_id(), eval.null_id(), eval.void_id());
    let second = (eval.true_id(), eval.false_id(), eval.null_id(), eval.void_id());
    assert_eq!(first, second);
}

#[test]
fn call_native_propagates_the_natives_error_without_checking_the_push_contract() {
    use wollok_runtime::NativeError;

    fn always_fails(_eval: &mut Evaluation, _receiver: wollok_runtime::ObjectId, _args: &[wollok_runtime::ObjectId]) -> Result<(), NativeError> {
        Err(NativeError::type_error("deliberate failure"))
    }

    let mut eval = Evaluation::new();
    let receiver = eval.void_id();
    let err = eval.call_native(always_fails, receiver, &[]).unwrap_err();
    assert!(matches!(err, NativeError::TypeError(_)));
}
