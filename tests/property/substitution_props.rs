use mockwrap::{MockWrapper, TargetRegistry};
use proptest::prelude::*;
use serde_json::{json, Value};

use crate::utils::{json_args, json_value};

proptest! {
    #[test]
    fn test_stand_in_returns_configured_value_for_any_args(
        value in json_value(),
        args in json_args()
    ) {
        let registry = TargetRegistry::new();
        registry.register("pkg.mod.func", |_args| Ok(json!("original")));

        let wrapper = MockWrapper::new(
            registry.clone(),
            vec![("pkg.mod.func".to_string(), value.clone())],
        );

        let view = registry.clone();
        let call_args = args.clone();
        let wrapped = wrapper.wrap(move |()| view.call("pkg.mod.func", &call_args));

        prop_assert_eq!(wrapped(()).unwrap(), value);
    }

    #[test]
    fn test_original_restored_for_any_value(value in json_value()) {
        let registry = TargetRegistry::new();
        registry.register("pkg.mod.func", |_args| Ok(json!("original")));

        let wrapper = MockWrapper::new(
            registry.clone(),
            vec![("pkg.mod.func".to_string(), value)],
        );

        let view = registry.clone();
        let wrapped = wrapper.wrap(move |()| view.call("pkg.mod.func", &[]));
        wrapped(()).unwrap();

        prop_assert_eq!(registry.call("pkg.mod.func", &[]).unwrap(), json!("original"));
    }

    #[test]
    fn test_all_targets_substituted_and_restored(values in prop::collection::vec(json_value(), 1..6)) {
        let registry = TargetRegistry::new();
        let mut mappings = Vec::new();
        for (i, value) in values.iter().enumerate() {
            let target = format!("pkg.mod.func{}", i);
            let original = json!(format!("original{}", i));
            let original_for_slot = original.clone();
            registry.register(&target, move |_args| Ok(original_for_slot.clone()));
            mappings.push((target, value.clone()));
        }

        let wrapper = MockWrapper::new(registry.clone(), mappings);

        let view = registry.clone();
        let expected = values.clone();
        let wrapped = wrapper.wrap(move |()| {
            for (i, value) in expected.iter().enumerate() {
                let observed = view.call(&format!("pkg.mod.func{}", i), &[json!(i)])?;
                assert_eq!(&observed, value);
            }
            Ok(json!("done"))
        });

        prop_assert_eq!(wrapped(()).unwrap(), json!("done"));

        for i in 0..values.len() {
            prop_assert_eq!(
                registry.call(&format!("pkg.mod.func{}", i), &[]).unwrap(),
                json!(format!("original{}", i))
            );
        }
    }

    #[test]
    fn test_empty_mapping_is_identity_for_any_return(value in json_value()) {
        let registry = TargetRegistry::new();
        let wrapper = MockWrapper::new(registry, Vec::new());

        let expected = value.clone();
        let wrapped = wrapper.wrap(move |()| -> mockwrap::Result<Value> { Ok(expected.clone()) });

        prop_assert_eq!(wrapped(()).unwrap(), value);
    }
}
