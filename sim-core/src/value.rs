use std::fmt;

/// A four-state digital logic value.
///
/// The discriminants are a deliberate 3-bit mask rather than a sequential `0..4`: `resolve_all`
/// ORs each value's discriminant into an accumulator and indexes an 8-entry lookup table with
/// the result, which keeps the hot path (run once per node, every tick) branch-free.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LogicValue {
    /// High-impedance / undriven. The identity element of [`resolve`].
    Z = 0b000,
    /// Logical low.
    Zero = 0b001,
    /// Logical high.
    One = 0b010,
    /// Unknown or conflicting.
    X = 0b100,
}

impl LogicValue {
    /// `true` if this value is [`LogicValue::Zero`].
    pub fn is_zero(self) -> bool {
        self == LogicValue::Zero
    }

    /// `true` if this value is [`LogicValue::One`].
    pub fn is_one(self) -> bool {
        self == LogicValue::One
    }

    /// `true` if this value is [`LogicValue::X`].
    pub fn is_x(self) -> bool {
        self == LogicValue::X
    }

    /// `true` if this value is [`LogicValue::Z`].
    pub fn is_z(self) -> bool {
        self == LogicValue::Z
    }
}

impl fmt::Display for LogicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            LogicValue::Zero => "0",
            LogicValue::One => "1",
            LogicValue::X => "X",
            LogicValue::Z => "Z",
        };
        write!(f, "{symbol}")
    }
}

/// `mask -> resolved value`, indexed by the OR of every driver's discriminant.
///
/// `000(Z)->Z, 001(0)->0, 010(1)->1, 011(0|1)->X, 100(X)->X, 101->X, 110->X, 111->X`.
const RESOLVE_TABLE: [LogicValue; 8] = [
    LogicValue::Z,
    LogicValue::Zero,
    LogicValue::One,
    LogicValue::X,
    LogicValue::X,
    LogicValue::X,
    LogicValue::X,
    LogicValue::X,
];

/// Resolves an accumulated 3-bit driver mask (as produced by ORing together [`LogicValue`]
/// discriminants) into a single [`LogicValue`]. This is the mandated hot-path shape: callers that
/// already have a mask (e.g. the per-component solver) should use this directly rather than
/// collecting a `Vec<LogicValue>` and calling [`resolve_all`].
pub fn resolve_mask(mask: u8) -> LogicValue {
    RESOLVE_TABLE[mask as usize]
}

/// Resolves two driver values into the single value a net with both drivers would settle to.
///
/// Commutative, idempotent (`resolve(a, a) == a`), `Z` is the identity (`resolve(a, Z) == a`),
/// and `X` dominates once present.
pub fn resolve(a: LogicValue, b: LogicValue) -> LogicValue {
    resolve_mask(a as u8 | b as u8)
}

/// Resolves any number of driver values into a single value, left-fold equivalent to repeated
/// [`resolve`]. Returns [`LogicValue::Z`] for an empty input, matching the algebraic identity --
/// callers must not treat an empty driver set as an error.
pub fn resolve_all<I>(values: I) -> LogicValue
where
    I: IntoIterator<Item = LogicValue>,
{
    let mut mask: u8 = 0;
    for value in values {
        mask |= value as u8;
    }
    resolve_mask(mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn any_logic_value() -> impl Strategy<Value = LogicValue> {
        prop_oneof![
            Just(LogicValue::Zero),
            Just(LogicValue::One),
            Just(LogicValue::X),
            Just(LogicValue::Z),
        ]
    }

    #[test]
    fn two_driver_resolution_table() {
        use LogicValue::*;
        let cases = [
            (Zero, Zero, Zero),
            (Zero, One, X),
            (Zero, X, X),
            (Zero, Z, Zero),
            (One, Zero, X),
            (One, One, One),
            (One, X, X),
            (One, Z, One),
            (X, Zero, X),
            (X, One, X),
            (X, X, X),
            (X, Z, X),
            (Z, Zero, Zero),
            (Z, One, One),
            (Z, X, X),
            (Z, Z, Z),
        ];
        for (a, b, expected) in cases {
            assert_eq!(resolve(a, b), expected, "resolve({a}, {b})");
        }
    }

    #[test]
    fn resolve_all_empty_is_z() {
        assert_eq!(resolve_all(std::iter::empty()), LogicValue::Z);
    }

    #[test]
    fn resolve_all_singleton_is_identity() {
        for v in [LogicValue::Zero, LogicValue::One, LogicValue::X, LogicValue::Z] {
            assert_eq!(resolve_all([v]), v);
        }
    }

    #[test]
    fn display_matches_spec_symbols() {
        assert_eq!(LogicValue::Zero.to_string(), "0");
        assert_eq!(LogicValue::One.to_string(), "1");
        assert_eq!(LogicValue::X.to_string(), "X");
        assert_eq!(LogicValue::Z.to_string(), "Z");
    }

    proptest! {
        #[test]
        fn resolve_is_commutative(a in any_logic_value(), b in any_logic_value()) {
            prop_assert_eq!(resolve(a, b), resolve(b, a));
        }

        #[test]
        fn resolve_is_idempotent(a in any_logic_value()) {
            prop_assert_eq!(resolve(a, a), a);
        }

        #[test]
        fn z_is_identity(a in any_logic_value()) {
            prop_assert_eq!(resolve(a, LogicValue::Z), a);
        }

        #[test]
        fn resolve_is_associative(a in any_logic_value(), b in any_logic_value(), c in any_logic_value()) {
            prop_assert_eq!(resolve(resolve(a, b), c), resolve(a, resolve(b, c)));
        }

        #[test]
        fn resolve_all_matches_fold(a in any_logic_value(), b in any_logic_value(), c in any_logic_value()) {
            let folded = resolve(resolve(a, b), c);
            prop_assert_eq!(resolve_all([a, b, c]), folded);
        }

        #[test]
        fn resolve_all_is_permutation_invariant(
            a in any_logic_value(), b in any_logic_value(), c in any_logic_value()
        ) {
            let forward = resolve_all([a, b, c]);
            let shuffled = resolve_all([c, a, b]);
            prop_assert_eq!(forward, shuffled);
        }
    }
}
