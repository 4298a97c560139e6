use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

const MIN_LEN: usize = 1;
const MAX_LEN: usize = 10;

/// A label name, between 1 and 10 bytes long
///
/// Ordered lexicographically so it can key the label table.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ident(String);

impl Ident {
  pub fn new(name: &str) -> Result<Self> {
    if !(MIN_LEN..=MAX_LEN).contains(&name.len()) {
      return Err(Error::InvalidIdentifier(name.to_owned()));
    }
    Ok(Self(name.to_owned()))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl FromStr for Ident {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    Self::new(s)
  }
}

impl TryFrom<&str> for Ident {
  type Error = Error;

  fn try_from(s: &str) -> Result<Self> {
    Self::new(s)
  }
}

impl fmt::Display for Ident {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  #[test]
  fn bounds() {
    assert!(Ident::new("a").is_ok());
    assert!(Ident::new("abcdefghij").is_ok());
    assert_eq!(
      Ident::new(""),
      Err(Error::InvalidIdentifier(String::new()))
    );
    assert_eq!(
      Ident::new("abcdefghijk"),
      Err(Error::InvalidIdentifier("abcdefghijk".into()))
    );
  }

  #[test]
  fn value_equality_and_order() {
    let a: Ident = "alpha".parse().unwrap();
    let b = Ident::try_from("alpha").unwrap();
    assert_eq!(a, b);
    assert!(Ident::new("abc").unwrap() < Ident::new("abd").unwrap());
    assert!(Ident::new("ab").unwrap() < Ident::new("abc").unwrap());
    assert_eq!(a.to_string(), "alpha");
  }

  proptest! {
    #[test]
    fn accepts_exactly_one_to_ten(name in "[a-z_]{0,16}") {
      let ok = (1..=10).contains(&name.len());
      prop_assert_eq!(Ident::new(&name).is_ok(), ok);
    }
  }
}
