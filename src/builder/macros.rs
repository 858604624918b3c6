//! Macros for ergonomic transition tables.

/// Build a `Vec` of transitions from a table literal.
///
/// Each row is `from => to, on trigger`, optionally followed by
/// `, if guard` and `, then action`. Rows are separated by `;`.
///
/// # Example
///
/// ```
/// use reactive_fsm::core::IdSpace;
/// use reactive_fsm::transitions;
///
/// let ids = IdSpace::new();
/// let locked = ids.state();
/// let (coin, push) = (ids.event(), ids.event());
///
/// let table = transitions![
///     ids.initial() => &locked, on &coin;
///     &locked => ids.final_state(), on &push, if || true, then |_| println!("opening");
/// ];
///
/// let mut fsm = ids.fsm();
/// fsm.add_transitions(table);
/// fsm.init();
/// fsm.execute(&coin).unwrap();
/// fsm.execute(&push).unwrap();
/// assert!(fsm.is_final());
/// ```
#[macro_export]
macro_rules! transitions {
    (
        $(
            $from:expr => $to:expr, on $trigger:expr
            $(, if $guard:expr)?
            $(, then $action:expr)?
        );* $(;)?
    ) => {
        vec![
            $({
                let transition = $crate::core::Transition::new($from, $to, $trigger);
                $(let transition = transition.guard($guard);)?
                $(let transition = transition.action($action);)?
                transition
            }),*
        ]
    };
}

#[cfg(test)]
mod tests {
    use crate::core::IdSpace;
    use std::cell::Cell;

    #[test]
    fn rows_keep_order_and_options() {
        let ids = IdSpace::new();
        let a = ids.state();
        let go = ids.event();
        let ran = Cell::new(false);

        let table = transitions![
            ids.initial() => &a, on &go, if || false;
            ids.initial() => &a, on &go, then |_| ran.set(true);
            &a => ids.final_state(), on &go, if || true, then |_| {};
        ];

        assert_eq!(table.len(), 3);
        assert!(table[0].has_guard() && !table[0].has_action());
        assert!(!table[1].has_guard() && table[1].has_action());
        assert!(table[2].has_guard() && table[2].has_action());
        assert_eq!(table[2].from_state(), &a);

        table[1].run_action(&go);
        assert!(ran.get());
    }

    #[test]
    fn trailing_separator_is_optional() {
        let ids = IdSpace::new();
        let go = ids.event();

        let table = transitions![ids.initial() => ids.final_state(), on &go];

        assert_eq!(table.len(), 1);
        assert!(!table[0].has_guard());
    }
}
