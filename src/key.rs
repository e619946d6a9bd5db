use std::fmt::{self, Debug, Formatter};
use std::hash::Hash;

use siphasher::sip128::{Hasher128, SipHasher13};

use crate::error::Error;
use crate::value::Value;

/// The maximum list nesting depth the codec canonicalizes.
///
/// The closed [`Value`] union cannot form reference cycles, so runaway
/// nesting is the one way an argument list can defeat bounded, deterministic
/// canonicalization.
pub const MAX_DEPTH: usize = 64;

/// A canonical key derived from an argument list.
///
/// Two argument lists map to the same key exactly if they are element-wise
/// equal: the digest covers arity, element order, and each element's variant
/// tag along with its payload.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct CacheKey(u128);

impl Debug for CacheKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "CacheKey({:032x})", self.0)
    }
}

/// Derives the canonical key for an argument list.
///
/// Fails with [`Error::UnencodableArgument`] when a list nests deeper than
/// [`MAX_DEPTH`].
pub fn encode(args: &[Value]) -> Result<CacheKey, Error> {
    check_depth(args, 0)?;
    let mut state = SipHasher13::new();
    args.hash(&mut state);
    Ok(CacheKey(state.finish128().as_u128()))
}

fn check_depth(values: &[Value], depth: usize) -> Result<(), Error> {
    for value in values {
        if let Value::List(items) = value {
            if depth == MAX_DEPTH {
                return Err(Error::UnencodableArgument);
            }
            check_depth(items, depth + 1)?;
        }
    }
    Ok(())
}
