//! Tile input parsing
//!
//! Input is a whitespace-separated stream of records, each the keyword
//! `tile` followed by the north, east, south and west labels. Line breaks
//! carry no meaning.

use log::debug;
use std::fs;
use std::path::Path;

use crate::io::configuration::TILE_RECORD_KEYWORD;
use crate::io::error::{Result, WithPath, malformed_tile};
use crate::puzzle::tile::Tile;

/// Number of tokens in one tile record
const RECORD_LEN: usize = 5;

/// Parse tile records from text, assigning ids in input order
///
/// # Errors
///
/// Returns an error if a record does not start with `tile` or the input
/// ends in the middle of a record
pub fn parse_tiles(input: &str) -> Result<Vec<Tile>> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let mut tiles = Vec::with_capacity(tokens.len() / RECORD_LEN);

    for (record, chunk) in tokens.chunks(RECORD_LEN).enumerate() {
        let [keyword, north, east, south, west] = chunk else {
            return Err(malformed_tile(
                record,
                &format!(
                    "expected '{TILE_RECORD_KEYWORD}' and 4 edge labels, found {} token(s)",
                    chunk.len()
                ),
            ));
        };
        if *keyword != TILE_RECORD_KEYWORD {
            return Err(malformed_tile(
                record,
                &format!("expected '{TILE_RECORD_KEYWORD}', found '{keyword}'"),
            ));
        }
        tiles.push(Tile::new(record, *north, *east, *south, *west));
    }

    Ok(tiles)
}

/// Read and parse a tile file
///
/// # Errors
///
/// Returns an error if the file cannot be read or contains a malformed record
pub fn load_tiles(path: &Path) -> Result<Vec<Tile>> {
    let contents = fs::read_to_string(path).with_path(path, "read")?;
    let tiles = parse_tiles(&contents)?;
    debug!("loaded {} tiles from {}", tiles.len(), path.display());
    Ok(tiles)
}
