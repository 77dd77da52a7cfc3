//! salseg-region - Region processing for salseg
//!
//! This crate provides region processing functionality including:
//!
//! - **Connected component analysis** - Finding and labeling connected regions,
//!   with optional hole filling
//! - **Distance transform** - Chamfer approximation of the Euclidean distance
//!   to the nearest background pixel
//! - **Watershed segmentation** - Marker-controlled priority flooding of a
//!   color image
//!
//! # Examples
//!
//! ## Finding connected components
//!
//! ```
//! use salseg_region::{find_connected_components, ConnectivityType};
//! use salseg_core::{Channels, RasterMut, Raster};
//!
//! let mut mask = RasterMut::new(100, 100, Channels::Gray).unwrap();
//! mask.set_pixel(10, 10, 255).unwrap();
//! mask.set_pixel(11, 10, 255).unwrap();
//! mask.set_pixel(50, 50, 255).unwrap();
//! let mask: Raster = mask.into();
//!
//! let components = find_connected_components(&mask, ConnectivityType::FourWay).unwrap();
//! assert_eq!(components.len(), 2);
//! ```
//!
//! ## Watershed segmentation
//!
//! ```
//! use salseg_region::watershed;
//! use salseg_core::{Channels, LabelMatrix, Raster};
//!
//! let image = Raster::new(10, 10, Channels::Rgb).unwrap();
//! let mut markers = LabelMatrix::new(10, 10).unwrap();
//! markers.set(5, 5, 2).unwrap();
//! watershed(&image, &mut markers).unwrap();
//! assert_eq!(markers.get(1, 1), Some(2));
//! ```

pub mod conncomp;
pub mod distance;
mod error;
pub mod watershed;

pub use conncomp::{
    Bounds, ConnectedComponent, ConnectivityType, fill_label_holes, find_connected_components,
    label_connected_components,
};
pub use distance::distance_transform;
pub use error::{RegionError, RegionResult};
pub use watershed::{color_difference, watershed};
