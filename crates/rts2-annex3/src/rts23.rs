//! Product codes from RTS 23 Annex, Table 2.
//!
//! The commodity criteria segment by the RTS 23 product classification
//! rather than free text: metal type is a child code of `METL`, energy type
//! a child code of `NRGY`. The maturity dispatch for energy groups those
//! codes into the three bucket regimes of the tables.

/// Child codes of `METL`: non-precious and precious metals.
pub const METAL_PRODUCTS: [&str; 2] = ["NPRM", "PRME"];

/// Child codes of `NRGY`.
pub const ENERGY_PRODUCTS: [&str; 8] = [
    "ELEC", "NGAS", "OILP", "COAL", "INRG", "RNNG", "LGHT", "DIST",
];

/// Energy codes bucketed as oil / oil distillates / oil light ends.
pub const OIL_PRODUCTS: [&str; 3] = ["OILP", "DIST", "LGHT"];

/// Energy codes bucketed as coal.
pub const COAL_PRODUCTS: [&str; 1] = ["COAL"];

/// Energy codes bucketed as natural gas / electricity / inter-energy.
pub const GAS_ELECTRICITY_PRODUCTS: [&str; 4] = ["ELEC", "NGAS", "INRG", "RNNG"];
