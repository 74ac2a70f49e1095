use bincode::{
    config,
    serde::{decode_from_slice, encode_to_vec},
};

use crate::{catalog::Catalog, error::Result};

/// Snapshot of a catalog in bincode's standard encoding.
pub fn encode(catalog: &Catalog) -> Result<Vec<u8>> {
    Ok(encode_to_vec(catalog, config::standard())?)
}

pub fn decode(bytes: &[u8]) -> Result<Catalog> {
    let (catalog, _): (Catalog, _) = decode_from_slice(bytes, config::standard())?;
    Ok(catalog)
}
