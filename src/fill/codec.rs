//! Bit layouts for packed Z values.
//!
//! Each packed strategy stores several provenance values in one 64-bit `z`.
//! The layouts below are the single definition used both to encode (in the
//! strategies) and to decode (in the corrector and by callers). All shifts
//! and masks operate on `u64`; `z` is reinterpreted bit-for-bit.
//!
//! Bit 63 is reserved in every layout as the pass-through marker: a value
//! with it set is never touched by the pair-order corrector.

/// Most significant bit; marks a value the corrector must leave alone.
pub const PASS_THROUGH_BIT: u64 = 1 << 63;

/// Largest value that is plain, unpacked Z.
pub const PLAIN_MAX: u64 = 0xFFFF_FFFF;

const LOW31: u64 = 0x7FFF_FFFF;

#[inline]
const fn mask(width: u32) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1 << width) - 1
    }
}

#[inline]
const fn place(value: u64, shift: u32, width: u32) -> u64 {
    (value & mask(width)) << shift
}

#[inline]
const fn field(bits: u64, shift: u32, width: u32) -> u64 {
    (bits >> shift) & mask(width)
}

/// A fixed-width bit layout stored in a point's `z`.
pub trait PackedLayout: Sized {
    /// Packs the fields into a `z` value. Fields wider than the layout
    /// allows are truncated to their slot.
    fn encode(&self) -> i64;

    /// Unpacks the fields from a `z` value.
    fn decode(z: i64) -> Self;
}

/// True if the pass-through marker is set.
#[inline]
pub fn is_pass_through(z: i64) -> bool {
    (z as u64) & PASS_THROUGH_BIT != 0
}

/// True if `z`, read as unsigned, is small enough to be plain input Z.
#[inline]
pub fn is_plain(z: i64) -> bool {
    (z as u64) <= PLAIN_MAX
}

/// True if `z` is eligible for pair-order correction: strictly between
/// [`PLAIN_MAX`] and [`PASS_THROUGH_BIT`] when read as unsigned.
#[inline]
pub fn is_pair_candidate(z: i64) -> bool {
    !is_plain(z) && !is_pass_through(z)
}

/// Two 32-bit values, one per edge.
///
/// | bits   | field |
/// |--------|-------|
/// | 63..32 | `hi` (edge 1) |
/// | 31..0  | `lo` (edge 2) |
///
/// Used by both-uint32, both-max, both-min and two-interpolate. Because
/// bit 63 doubles as the pass-through marker, values meant for correction
/// keep `hi` within 31 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairU32 {
    /// Edge 1 value, bits 63..32.
    pub hi: u32,
    /// Edge 2 value, bits 31..0.
    pub lo: u32,
}

impl PairU32 {
    /// Exchanges the halves of a packed pair, masking each to 31 bits.
    #[inline]
    pub fn swapped(z: i64) -> i64 {
        let bits = z as u64;
        ((bits & LOW31) << 32 | field(bits, 32, 31)) as i64
    }
}

impl PackedLayout for PairU32 {
    fn encode(&self) -> i64 {
        (place(self.hi as u64, 32, 32) | place(self.lo as u64, 0, 32)) as i64
    }

    fn decode(z: i64) -> Self {
        let bits = z as u64;
        Self {
            hi: field(bits, 32, 32) as u32,
            lo: field(bits, 0, 32) as u32,
        }
    }
}

/// Two 31-bit values, each with a direction flag above it.
///
/// | bits   | field |
/// |--------|-------|
/// | 63     | `hi_flag` (edge 1 top Z >= bottom Z) |
/// | 62..32 | `hi` (edge 1 bottom Z) |
/// | 31     | `lo_flag` (edge 2 top Z >= bottom Z) |
/// | 30..0  | `lo` (edge 2 bottom Z) |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairU31Flags {
    /// Edge 1 bottom Z, 31 bits.
    pub hi: u32,
    /// Edge 1 top Z is at least its bottom Z.
    pub hi_flag: bool,
    /// Edge 2 bottom Z, 31 bits.
    pub lo: u32,
    /// Edge 2 top Z is at least its bottom Z.
    pub lo_flag: bool,
}

impl PackedLayout for PairU31Flags {
    fn encode(&self) -> i64 {
        (place(self.hi_flag as u64, 63, 1)
            | place(self.hi as u64, 32, 31)
            | place(self.lo_flag as u64, 31, 1)
            | place(self.lo as u64, 0, 31)) as i64
    }

    fn decode(z: i64) -> Self {
        let bits = z as u64;
        Self {
            hi: field(bits, 32, 31) as u32,
            hi_flag: field(bits, 63, 1) == 1,
            lo: field(bits, 0, 31) as u32,
            lo_flag: field(bits, 31, 1) == 1,
        }
    }
}

/// All four endpoint Zs at 16 bits each.
///
/// | bits   | field |
/// |--------|-------|
/// | 63..48 | `e1_bot` |
/// | 47..32 | `e1_top` |
/// | 31..16 | `e2_bot` |
/// | 15..0  | `e2_top` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuadU16 {
    /// Edge 1 bottom Z.
    pub e1_bot: u16,
    /// Edge 1 top Z.
    pub e1_top: u16,
    /// Edge 2 bottom Z.
    pub e2_bot: u16,
    /// Edge 2 top Z.
    pub e2_top: u16,
}

impl PackedLayout for QuadU16 {
    fn encode(&self) -> i64 {
        (place(self.e1_bot as u64, 48, 16)
            | place(self.e1_top as u64, 32, 16)
            | place(self.e2_bot as u64, 16, 16)
            | place(self.e2_top as u64, 0, 16)) as i64
    }

    fn decode(z: i64) -> Self {
        let bits = z as u64;
        Self {
            e1_bot: field(bits, 48, 16) as u16,
            e1_top: field(bits, 32, 16) as u16,
            e2_bot: field(bits, 16, 16) as u16,
            e2_top: field(bits, 0, 16) as u16,
        }
    }
}

/// Two single-precision floats.
///
/// | bits   | field |
/// |--------|-------|
/// | 63..32 | `hi` IEEE-754 bits (edge 1) |
/// | 31..0  | `lo` IEEE-754 bits (edge 2) |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairF32 {
    /// Edge 1 bottom Z as a float.
    pub hi: f32,
    /// Edge 2 bottom Z as a float.
    pub lo: f32,
}

impl PackedLayout for PairF32 {
    fn encode(&self) -> i64 {
        (place(self.hi.to_bits() as u64, 32, 32) | place(self.lo.to_bits() as u64, 0, 32)) as i64
    }

    fn decode(z: i64) -> Self {
        let bits = z as u64;
        Self {
            hi: f32::from_bits(field(bits, 32, 32) as u32),
            lo: f32::from_bits(field(bits, 0, 32) as u32),
        }
    }
}

/// Two 21-bit Zs plus the deviation between the engine's intersection
/// point and an independently recomputed one.
///
/// | bits   | field |
/// |--------|-------|
/// | 63     | `flag` (edge 2 top Z >= bottom Z) |
/// | 62..42 | `e1_bot` |
/// | 41..21 | `e2_bot` |
/// | 20     | `saturated` (no opinion, or delta clamped) |
/// | 19..10 | `dx`, 10-bit two's complement |
/// | 9..0   | `dy`, 10-bit two's complement |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SecondOpinion {
    /// Edge 2 top Z is at least its bottom Z.
    pub flag: bool,
    /// Edge 1 bottom Z, 21 bits.
    pub e1_bot: u32,
    /// Edge 2 bottom Z, 21 bits.
    pub e2_bot: u32,
    /// Edges were parallel, or a delta component was clamped.
    pub saturated: bool,
    /// Recomputed x minus engine x.
    pub dx: i16,
    /// Recomputed y minus engine y.
    pub dy: i16,
}

impl SecondOpinion {
    /// Smallest representable delta component.
    pub const DELTA_MIN: i16 = -512;
    /// Largest representable delta component.
    pub const DELTA_MAX: i16 = 511;
}

#[inline]
fn sign_extend_10(v: u64) -> i16 {
    ((v as u16) << 6) as i16 >> 6
}

impl PackedLayout for SecondOpinion {
    fn encode(&self) -> i64 {
        (place(self.flag as u64, 63, 1)
            | place(self.e1_bot as u64, 42, 21)
            | place(self.e2_bot as u64, 21, 21)
            | place(self.saturated as u64, 20, 1)
            | place(self.dx as u16 as u64, 10, 10)
            | place(self.dy as u16 as u64, 0, 10)) as i64
    }

    fn decode(z: i64) -> Self {
        let bits = z as u64;
        Self {
            flag: field(bits, 63, 1) == 1,
            e1_bot: field(bits, 42, 21) as u32,
            e2_bot: field(bits, 21, 21) as u32,
            saturated: field(bits, 20, 1) == 1,
            dx: sign_extend_10(field(bits, 10, 10)),
            dy: sign_extend_10(field(bits, 0, 10)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_pair_candidate_window() {
        assert!(!is_pair_candidate(0));
        assert!(!is_pair_candidate(0xFFFF_FFFF));
        assert!(is_pair_candidate(0x1_0000_0000));
        assert!(is_pair_candidate(0x7FFF_FFFF_0000_0000));
        assert!(!is_pair_candidate(0x8000_0000_0000_0000_u64 as i64));
        assert!(is_pair_candidate(i64::MAX));
        assert!(!is_pair_candidate(i64::MIN));
        assert!(!is_pair_candidate(-1));
        assert!(is_pass_through(-1));
        assert!(is_plain(0xFFFF_FFFF));
        assert!(!is_plain(-1));
    }

    #[test]
    fn test_pair_u32_layout() {
        let z = PairU32 { hi: 7, lo: 9 }.encode();
        assert_eq!(z, (7_i64 << 32) + 9);
        assert_eq!(PairU32::decode(z), PairU32 { hi: 7, lo: 9 });
    }

    #[test]
    fn test_pair_u32_swapped() {
        let z = PairU32 { hi: 7, lo: 9 }.encode();
        assert_eq!(PairU32::decode(PairU32::swapped(z)), PairU32 { hi: 9, lo: 7 });
        // Each half is masked to 31 bits.
        let z = PairU32 {
            hi: 0x7FFF_FFFF,
            lo: 0xFFFF_FFFF,
        }
        .encode();
        assert_eq!(
            PairU32::decode(PairU32::swapped(z)),
            PairU32 {
                hi: 0x7FFF_FFFF,
                lo: 0x7FFF_FFFF,
            }
        );
    }

    #[test]
    fn test_pair_u31_flags_layout() {
        let z = PairU31Flags {
            hi: 3,
            hi_flag: true,
            lo: 5,
            lo_flag: true,
        }
        .encode() as u64;
        assert_eq!(z, (1 << 63) | (3 << 32) | (1 << 31) | 5);
    }

    #[test]
    fn test_quad_u16_layout() {
        let z = QuadU16 {
            e1_bot: 1,
            e1_top: 2,
            e2_bot: 3,
            e2_top: 4,
        }
        .encode();
        assert_eq!(z, 0x0001_0002_0003_0004);
    }

    #[test]
    fn test_second_opinion_negative_delta() {
        let so = SecondOpinion {
            flag: false,
            e1_bot: 0x1F_FFFF,
            e2_bot: 1,
            saturated: false,
            dx: SecondOpinion::DELTA_MIN,
            dy: -1,
        };
        assert_eq!(SecondOpinion::decode(so.encode()), so);
        assert!(!is_pass_through(so.encode()));
    }

    proptest! {
        #[test]
        fn prop_pair_u32_roundtrip(hi in any::<u32>(), lo in any::<u32>()) {
            let p = PairU32 { hi, lo };
            prop_assert_eq!(PairU32::decode(p.encode()), p);
        }

        #[test]
        fn prop_pair_u31_flags_roundtrip(
            hi in 0u32..=0x7FFF_FFFF,
            lo in 0u32..=0x7FFF_FFFF,
            hi_flag in any::<bool>(),
            lo_flag in any::<bool>(),
        ) {
            let p = PairU31Flags { hi, hi_flag, lo, lo_flag };
            prop_assert_eq!(PairU31Flags::decode(p.encode()), p);
        }

        #[test]
        fn prop_quad_u16_roundtrip(
            a in any::<u16>(),
            b in any::<u16>(),
            c in any::<u16>(),
            d in any::<u16>(),
        ) {
            let q = QuadU16 { e1_bot: a, e1_top: b, e2_bot: c, e2_top: d };
            prop_assert_eq!(QuadU16::decode(q.encode()), q);
        }

        #[test]
        fn prop_pair_f32_roundtrip(hi in any::<f32>(), lo in any::<f32>()) {
            let d = PairF32::decode(PairF32 { hi, lo }.encode());
            prop_assert_eq!(d.hi.to_bits(), hi.to_bits());
            prop_assert_eq!(d.lo.to_bits(), lo.to_bits());
        }

        #[test]
        fn prop_second_opinion_roundtrip(
            flag in any::<bool>(),
            e1_bot in 0u32..(1 << 21),
            e2_bot in 0u32..(1 << 21),
            saturated in any::<bool>(),
            dx in SecondOpinion::DELTA_MIN..=SecondOpinion::DELTA_MAX,
            dy in SecondOpinion::DELTA_MIN..=SecondOpinion::DELTA_MAX,
        ) {
            let so = SecondOpinion { flag, e1_bot, e2_bot, saturated, dx, dy };
            prop_assert_eq!(SecondOpinion::decode(so.encode()), so);
        }

        #[test]
        fn prop_swap_twice_is_identity(hi in 0u32..=0x7FFF_FFFF, lo in 0u32..=0x7FFF_FFFF) {
            let z = PairU32 { hi, lo }.encode();
            prop_assert_eq!(PairU32::swapped(PairU32::swapped(z)), z);
        }
    }
}
