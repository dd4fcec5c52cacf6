//! Selectors for the case detail page, pinned to the source site's current
//! markup.

/// Rows of the case information block.
pub const CASE_INFO_ROWS: &str = "#case_information table tr";
/// Rows of the circumstances block.
pub const CIRCUMSTANCES_ROWS: &str = "#circumstances table tr";
/// Rows of the physical characteristics block.
pub const CHARACTERISTICS_ROWS: &str = "#physical_characteristics table tr";
/// Rows of the investigating agency block.
pub const AGENCY_ROWS: &str = "#police_information table tr";
/// Rows of the case manager contact column.
pub const CASE_MANAGER_ROWS: &str = "#contacts .column2-unit-left table tr";
/// Rows of the regional administrator contact column.
pub const REGIONAL_ADMIN_ROWS: &str = "#contacts .column2-unit-right table tr";
/// Images in the photo strip.
pub const PHOTO_IMAGES: &str = "#photo_box img";

/// The block that signals the detail view has loaded.
pub const CASE_INFORMATION_BLOCK: &str = "#case_information";
