use proptest::prelude::*;
use serde_json::{Map, Value, json};
use transduce::{Stages, Transform, identity, save_entries, transduce, transduce_with};
use transduce_convert::*;

fn object_strategy() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::vec(("[a-z_]{0,6}", any::<i64>()), 0..24).prop_map(|members| {
        members
            .into_iter()
            .map(|(name, value)| (name, Value::from(value)))
            .collect()
    })
}

proptest! {
    #[test]
    fn object_round_trip(object in object_strategy()) {
        let round_tripped = to_object(from_object(&object));
        // Order-sensitive comparison; `Map` equality alone ignores order.
        prop_assert_eq!(
            object.iter().collect::<Vec<_>>(),
            round_tripped.iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn identity_pass_through_object(object in object_strategy()) {
        let result = transduce_object_to_object(&object, identity::<(String, Value)>()).unwrap();
        prop_assert_eq!(
            object.iter().collect::<Vec<_>>(),
            result.iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn to_vec_matches_values(values in prop::collection::vec(any::<u16>(), 0..32)) {
        let canonical = transduce(&values, save_entries()).unwrap();
        prop_assert_eq!(values, to_vec(canonical));
    }
}

#[test]
fn prototype_named_members_are_plain_data() {
    let object = json!({ "__proto__": { "admin": true }, "constructor": 1, "name": "x" });
    let object = object.as_object().unwrap();

    let result = transduce_object_to_object(
        object,
        Stages::new().filter(|(name, _): &(String, Value)| name != "name"),
    )
    .unwrap();

    insta::assert_debug_snapshot!(result, @r#"
    {
        "__proto__": Object {
            "admin": Bool(true),
        },
        "constructor": Number(1),
    }
    "#);
}

#[test]
fn bound_helper_reused_across_inputs() {
    let first_input = [1, 3, 3, 4];
    let second_input = [2, 4];
    let mut odd_values = bind(
        |input: &[i32]| {
            transduce_with(
                input,
                save_entries(),
                identity().filter(|(_, value): &(usize, i32)| value % 2 != 0),
            )
        },
        ToSet,
    );

    let first = odd_values(&first_input[..]).unwrap();
    assert_eq!(vec![1, 3], first.into_iter().collect::<Vec<_>>());
    let second = odd_values(&second_input[..]).unwrap();
    assert!(second.is_empty());
}
