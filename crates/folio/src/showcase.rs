#![forbid(unsafe_code)]

//! Stock project showcase content.

use folio_layout::{GridConfig, LayoutConfig, MediaDescriptor};

const STOCK: [(&str, &str); 6] = [
    ("image.png", "Powermate landing page"),
    (
        "./assets/projects/supplychain/img1.png",
        "Tessaract (Blockchain-based Supply Chain Tracker)",
    ),
    (
        "assets/projects/coadingplatform/img1.png",
        "Coading Platform - Play with code or compete in challenges",
    ),
    (
        "assets/projects/darkpattern/img1.png",
        "Flow Spector (Dark Pattern Detection Chrome Extension & Educational Platform)",
    ),
    ("image1.png", "Taxeasy"),
    ("image2.png", "Affordable Agency"),
];

/// The six project tiles the showcase ships with, in display order.
#[must_use]
pub fn stock_tiles() -> Vec<MediaDescriptor> {
    STOCK
        .iter()
        .map(|&(src, caption)| MediaDescriptor::image(src, caption))
        .collect()
}

/// Default layout with the stock tiles preloaded.
#[must_use]
pub fn stock_config() -> GridConfig {
    GridConfig::new(LayoutConfig::default()).with_tiles(stock_tiles())
}
