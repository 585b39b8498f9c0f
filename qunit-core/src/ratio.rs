//! Exact rational conversion factors.
//!
//! Every unit carries its scale as a [`Ratio`]: the number of canonical units of its dimension in one of this unit.
//! Ratios are built and combined with `const fn`s, so a unit's factor, and the factor between any two units, is
//! computed while compiling. Keeping factors symbolic (instead of as `f64` constants) has two effects:
//!
//! - chains of definitions (`hour = 60 minute`, `minute = 60 second`) do not accumulate rounding error;
//! - two factors derived along different paths can be compared for exact equality in a `const` context.
//!
//! ```rust
//! use qunit_core::Ratio;
//!
//! const WEEK_IN_HOURS: Ratio = Ratio::integer(7).mul(Ratio::integer(24));
//! const _: () = assert!(WEEK_IN_HOURS.equals(Ratio::integer(168)));
//! ```
//!
//! Factors that have no exact rational form (anything involving π) are expressed through
//! [`Ratio::approximate`], the best rational approximation of an `f64`. Products whose exact terms would overflow
//! `i128` fall back to the same approximation.

use core::fmt;

/// An exact rational number `num / den` used as a unit conversion factor.
///
/// # Invariants
///
/// - The fraction is always stored in lowest terms.
/// - The denominator is strictly positive.
///
/// Two ratios are therefore numerically equal iff both fields are equal, which is what [`Ratio::equals`] (and
/// `PartialEq`) checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ratio {
    num: i128,
    den: i128,
}

impl Ratio {
    /// The identity factor.
    pub const ONE: Ratio = Ratio { num: 1, den: 1 };

    /// Upper bound for the numerator and denominator produced by [`Ratio::approximate`].
    pub const MAX_TERM: i128 = 1 << 64;

    /// Creates the reduced ratio `num / den`.
    ///
    /// # Panics
    ///
    /// Panics if `den == 0`. In a `const` context this is a compile error.
    ///
    /// ```rust
    /// use qunit_core::Ratio;
    /// let r = Ratio::new(6, -4);
    /// assert_eq!((r.num(), r.den()), (-3, 2));
    /// ```
    pub const fn new(num: i128, den: i128) -> Ratio {
        assert!(den != 0, "conversion ratio with a zero denominator");
        let g = gcd(num, den);
        let (mut n, mut d) = (num / g, den / g);
        if d < 0 {
            n = -n;
            d = -d;
        }
        Ratio { num: n, den: d }
    }

    /// Creates the integer ratio `value / 1`.
    #[inline]
    pub const fn integer(value: i128) -> Ratio {
        Ratio { num: value, den: 1 }
    }

    /// Numerator (sign carrier).
    #[inline]
    pub const fn num(self) -> i128 {
        self.num
    }

    /// Denominator (always positive).
    #[inline]
    pub const fn den(self) -> i128 {
        self.den
    }

    /// `10^exp`, exact for `exp` in `-36..=36`.
    ///
    /// ```rust
    /// use qunit_core::Ratio;
    /// assert_eq!(Ratio::pow10(-3), Ratio::new(1, 1000));
    /// assert_eq!(Ratio::pow10(3), Ratio::integer(1000));
    /// ```
    pub const fn pow10(exp: i32) -> Ratio {
        let mut magnitude: i128 = 1;
        let mut i = 0;
        let steps = exp.unsigned_abs();
        while i < steps {
            magnitude = match magnitude.checked_mul(10) {
                Some(m) => m,
                None => panic!("power of ten out of range for an exact ratio"),
            };
            i += 1;
        }
        if exp < 0 {
            Ratio { num: 1, den: magnitude }
        } else {
            Ratio { num: magnitude, den: 1 }
        }
    }

    /// Exact product, or `None` if a reduced term does not fit in `i128`.
    pub const fn checked_mul(self, rhs: Ratio) -> Option<Ratio> {
        // Cross-cancel first so that the intermediate terms stay as small as possible.
        let g1 = gcd(self.num, rhs.den);
        let g2 = gcd(rhs.num, self.den);
        let (n1, d2) = (self.num / g1, rhs.den / g1);
        let (n2, d1) = (rhs.num / g2, self.den / g2);
        match (n1.checked_mul(n2), d1.checked_mul(d2)) {
            (Some(n), Some(d)) => Some(Ratio::new(n, d)),
            _ => None,
        }
    }

    /// Product of two ratios.
    ///
    /// Exact whenever the result is representable; otherwise the best rational approximation of the `f64`
    /// product.
    #[inline]
    pub const fn mul(self, rhs: Ratio) -> Ratio {
        match self.checked_mul(rhs) {
            Some(r) => r,
            None => Ratio::approximate(self.to_f64() * rhs.to_f64()),
        }
    }

    /// Reciprocal.
    ///
    /// # Panics
    ///
    /// Panics on a zero ratio.
    #[inline]
    pub const fn recip(self) -> Ratio {
        assert!(self.num != 0, "reciprocal of a zero ratio");
        Ratio::new(self.den, self.num)
    }

    /// Quotient of two ratios, with the same exactness rules as [`Ratio::mul`].
    #[inline]
    pub const fn div(self, rhs: Ratio) -> Ratio {
        self.mul(rhs.recip())
    }

    /// `const` equality.
    #[inline]
    pub const fn equals(self, other: Ratio) -> bool {
        self.num == other.num && self.den == other.den
    }

    /// `true` for the identity factor.
    #[inline]
    pub const fn is_one(self) -> bool {
        self.num == 1 && self.den == 1
    }

    /// Nearest `f64` to this ratio.
    #[inline]
    pub const fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// Best rational approximation of a finite `f64`.
    ///
    /// The input is first decomposed into its exact binary fraction `m / 2^k`; the continued-fraction expansion of
    /// that fraction is then walked with integer arithmetic only, stopping at the first convergent that rounds back
    /// to `value`, or at the last convergent whose terms stay within [`Ratio::MAX_TERM`]. Simple decimals therefore
    /// come back in their short form (`0.1` gives `1/10`), and irrational constants get the shortest fraction that
    /// is indistinguishable from them in `f64`.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not finite or its magnitude exceeds [`Ratio::MAX_TERM`].
    ///
    /// ```rust
    /// use qunit_core::Ratio;
    /// use core::f64::consts::PI;
    ///
    /// assert_eq!(Ratio::approximate(0.75), Ratio::new(3, 4));
    /// assert_eq!(Ratio::approximate(0.1), Ratio::new(1, 10));
    /// assert_eq!(Ratio::approximate(PI).to_f64(), PI);
    /// ```
    pub const fn approximate(value: f64) -> Ratio {
        assert!(value.is_finite(), "cannot approximate a non-finite value");
        if value == 0.0 {
            return Ratio { num: 0, den: 1 };
        }
        let negative = value < 0.0;
        let target = if negative { -value } else { value };
        let max = Self::MAX_TERM as u128;

        // target == mant * 2^exp, exactly.
        let bits = target.to_bits();
        let biased = ((bits >> 52) & 0x7ff) as i32;
        let fraction = (bits & ((1u64 << 52) - 1)) as u128;
        let (mut mant, mut exp) = if biased == 0 {
            (fraction, -1074)
        } else {
            (fraction | (1u128 << 52), biased - 1075)
        };
        while exp < 0 && mant & 1 == 0 {
            mant >>= 1;
            exp += 1;
        }

        if exp >= 0 {
            // mant < 2^53, so any shift up to 74 stays inside u128.
            assert!(exp <= 74, "value too large to approximate as a ratio");
            let whole = mant << exp;
            assert!(whole <= max, "value too large to approximate as a ratio");
            let whole = whole as i128;
            return Ratio::integer(if negative { -whole } else { whole });
        }

        // Keep the denominator inside u128; only reachable for values far below 1 / MAX_TERM.
        while exp < -126 {
            mant >>= 1;
            exp += 1;
        }
        if mant == 0 {
            return Ratio { num: 0, den: 1 };
        }

        // Convergents h/k of p/q, seeded with h(-1)/k(-1) = 1/0 and h(-2)/k(-2) = 0/1.
        let (mut p, mut q) = (mant, 1u128 << (-exp) as u32);
        let (mut h_prev, mut h) = (0u128, 1u128);
        let (mut k_prev, mut k) = (1u128, 0u128);
        while q != 0 {
            let a = p / q;
            let (h_next, k_next) = match (mul_add(a, h, h_prev), mul_add(a, k, k_prev)) {
                (Some(hn), Some(kn)) => (hn, kn),
                _ => break,
            };
            if h_next > max || k_next > max {
                break;
            }
            h_prev = h;
            h = h_next;
            k_prev = k;
            k = k_next;

            let r = p % q;
            p = q;
            q = r;
            if h as f64 / k as f64 == target {
                break;
            }
        }

        assert!(k != 0, "value too large to approximate as a ratio");
        let h = h as i128;
        Ratio::new(if negative { -h } else { h }, k as i128)
    }
}

impl Default for Ratio {
    fn default() -> Self {
        Ratio::ONE
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

/// Greatest common divisor of `|a|` and `|b|`; `gcd(0, 0) == 1` so it is always a safe divisor.
const fn gcd(a: i128, b: i128) -> i128 {
    let (mut x, mut y) = (a.unsigned_abs(), b.unsigned_abs());
    while y != 0 {
        let t = x % y;
        x = y;
        y = t;
    }
    if x == 0 {
        1
    } else {
        x as i128
    }
}

const fn mul_add(a: u128, x: u128, y: u128) -> Option<u128> {
    match a.checked_mul(x) {
        Some(p) => p.checked_add(y),
        None => None,
    }
}
