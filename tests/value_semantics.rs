use maybe::Maybe;

#[test]
fn construction_and_queries() {
    let present = Maybe::Present(5);
    assert!(present.is_present());
    assert!(!present.is_absent());

    let absent = Maybe::<i32>::Absent;
    assert!(!absent.is_present());
    assert!(absent.is_absent());
}

#[test]
fn predicate_query() {
    assert!(Maybe::Present(10).is_present_and(|v| v > 5));
    assert!(!Maybe::Present(3).is_present_and(|v| v > 5));
    // The predicate must not run on an absent value.
    assert!(!Maybe::<i32>::Absent.is_present_and(|_| panic!("predicate ran on absent")));
}

#[test]
fn unwrap_returns_value() {
    assert_eq!(Maybe::Present(5).unwrap(), 5);
    assert_eq!(Maybe::Present("five").expect("should hold a value"), "five");
}

#[test]
#[should_panic(expected = "called `Maybe::unwrap()` on an absent value")]
fn unwrap_panics_when_absent() {
    Maybe::<i32>::Absent.unwrap();
}

#[test]
#[should_panic(expected = "no rank assigned")]
fn expect_panics_with_caller_message() {
    Maybe::<i32>::Absent.expect("no rank assigned");
}

#[test]
fn defaults_are_ignored_when_present() {
    assert_eq!(Maybe::Present(5).unwrap_or(9), 5);
    assert_eq!(Maybe::Present(5).unwrap_or_default(), 5);
    // The supplier must not run when a value is held.
    assert_eq!(
        Maybe::Present(5).unwrap_or_else(|| panic!("supplier ran on present")),
        5
    );
}

#[test]
fn defaults_fill_in_when_absent() {
    assert_eq!(Maybe::<i32>::Absent.unwrap_or(9), 9);
    assert_eq!(Maybe::<i32>::Absent.unwrap_or_else(|| 7), 7);
    assert_eq!(Maybe::<i32>::Absent.unwrap_or_default(), 0);
    assert_eq!(Maybe::<String>::Absent.unwrap_or_default(), String::new());
}

#[test]
fn take_moves_value_out_once() {
    let mut original = Maybe::Present(3);
    let moved = original.take();
    assert!(original.is_absent());
    assert_eq!(moved, Maybe::Present(3));

    // A second take finds nothing and changes nothing.
    let nothing = original.take();
    assert!(nothing.is_absent());
    assert!(original.is_absent());
}

#[test]
fn clones_are_independent() {
    let original = Maybe::Present(3);
    let mut clone = original.clone();
    let _ = clone.take();
    assert!(clone.is_absent());
    assert_eq!(original.unwrap(), 3);
}

#[test]
fn default_state_is_absent() {
    assert!(Maybe::<i32>::default().is_absent());
    assert!(Maybe::<String>::default().is_absent());
}

#[test]
fn option_interop_round_trips() {
    assert_eq!(Maybe::from(Some(5)), Maybe::Present(5));
    assert_eq!(Maybe::<i32>::from(None), Maybe::Absent);
    assert_eq!(Option::from(Maybe::Present(5)), Some(5));
    assert_eq!(Option::<i32>::from(Maybe::Absent), None);
}

#[test]
fn map_transforms_only_present_values() {
    assert_eq!(Maybe::Present(5).map(|v| v * 2), Maybe::Present(10));
    let mapped: Maybe<i32> = Maybe::<i32>::Absent.map(|_| panic!("mapper ran on absent"));
    assert!(mapped.is_absent());
}

#[test]
fn match_runs_exactly_one_branch() {
    let branches = std::cell::Cell::new(0);
    let doubled = Maybe::Present(5).map_or_else(
        || {
            branches.set(branches.get() + 1);
            -1
        },
        |v| {
            branches.set(branches.get() + 1);
            v * 2
        },
    );
    assert_eq!(doubled, 10);
    assert_eq!(branches.get(), 1);

    branches.set(0);
    let fallback = Maybe::<i32>::Absent.map_or_else(
        || {
            branches.set(branches.get() + 1);
            -1
        },
        |v| {
            branches.set(branches.get() + 1);
            v * 2
        },
    );
    assert_eq!(fallback, -1);
    assert_eq!(branches.get(), 1);
}

#[test]
fn borrowing_accessors() {
    let held = Maybe::Present(String::from("Ada"));
    assert_eq!(held.as_ref().map(|s| s.len()), Maybe::Present(3));
    // Borrowing did not consume the value.
    assert_eq!(held.unwrap(), "Ada");

    let mut mutable = Maybe::Present(String::from("Ada"));
    if let Maybe::Present(name) = mutable.as_mut() {
        name.push_str(" Lovelace");
    }
    assert_eq!(mutable.unwrap(), "Ada Lovelace");
}

#[test]
fn display_forms() {
    assert_eq!(Maybe::Present(5).to_string(), "Present(5)");
    assert_eq!(Maybe::<i32>::Absent.to_string(), "Absent");
}

#[test]
fn absent_orders_before_present() {
    assert!(Maybe::<i32>::Absent < Maybe::Present(i32::MIN));
    assert!(Maybe::Present(1) < Maybe::Present(2));
}
