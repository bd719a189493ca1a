//! Bonds (Table 2.1, 2.2 and 2.3).
//!
//! The bond sub-asset classes carry no segmentation criteria: the sub-asset
//! class name alone identifies the sub-class.

use rts2_taxonomy::{AssetClass, SubAssetClass};

pub(crate) fn asset_class() -> AssetClass {
    AssetClass::new("Bonds (all bond types except ETCs and ETNs)")
        .with_reference("Table 2.1, 2.2 and 2.3")
        .with_sub_asset_class(SubAssetClass::new("Sovereign Bond"))
        .with_sub_asset_class(SubAssetClass::new("Other Public Bond"))
        .with_sub_asset_class(SubAssetClass::new("Convertible Bond"))
        .with_sub_asset_class(SubAssetClass::new("Covered Bond"))
        .with_sub_asset_class(SubAssetClass::new("Corporate Bond"))
        .with_sub_asset_class(SubAssetClass::new("Other Bond"))
}
