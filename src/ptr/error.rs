use thiserror::Error;

#[allow(clippy::module_name_repetitions)]
#[derive(Error, Debug, PartialEq, Eq, Hash)]
pub enum PtrError {
    #[error("'{0}' does not appear to be an IPv6 address")]
    InvalidAddress(String),
    #[error("'{0}' is not an ip6.arpa pointer name")]
    InvalidPointer(String),
}
