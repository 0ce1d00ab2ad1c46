//! Compatibility attributes carried by jugglers and circuits.

/// The three-axis compatibility vector.
///
/// Both jugglers and circuits carry one of these. The vector is fixed at
/// creation and never mutated afterwards; match quality between a juggler and
/// a circuit is the dot product of their vectors.
///
/// # Examples
///
/// ```
/// use jugglefest_core::Attributes;
///
/// let juggler = Attributes::new(7.0, 6.0, 0.0);
/// let circuit = Attributes::new(10.0, 8.0, 10.0);
///
/// assert_eq!(juggler.dot(&circuit), 118.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Attributes {
    /// Hand-eye coordination (the `H:` field).
    pub hand_eye: f64,
    /// Endurance (the `E:` field).
    pub endurance: f64,
    /// Pizzazz (the `P:` field).
    pub pizzazz: f64,
}

impl Attributes {
    /// The zero vector.
    pub const ZERO: Attributes = Attributes {
        hand_eye: 0.0,
        endurance: 0.0,
        pizzazz: 0.0,
    };

    /// Creates a new attribute vector.
    #[inline]
    pub const fn new(hand_eye: f64, endurance: f64, pizzazz: f64) -> Self {
        Attributes {
            hand_eye,
            endurance,
            pizzazz,
        }
    }

    /// Dot product with another vector. Higher is a better match.
    #[inline]
    pub fn dot(&self, other: &Attributes) -> f64 {
        self.hand_eye * other.hand_eye
            + self.endurance * other.endurance
            + self.pizzazz * other.pizzazz
    }
}
