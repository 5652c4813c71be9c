use std::fmt::Display;

use geo::Point;
use serde::{Deserialize, Serialize};

use crate::model::ModelError;

/// an axis-aligned box in EPSG:4326 degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl BoundingBox {
    /// a box centered on `center`, extending `buffer` degrees (dx, dy) each side.
    pub fn around(center: &Point<f64>, buffer: (f64, f64)) -> Result<BoundingBox, ModelError> {
        let (dx, dy) = buffer;
        if !(dx > 0.0 && dy > 0.0) {
            return Err(ModelError::InvalidBoundingBox(format!(
                "buffer must be positive in both axes, found ({dx},{dy})"
            )));
        }
        let bbox = BoundingBox {
            xmin: center.x() - dx,
            ymin: center.y() - dy,
            xmax: center.x() + dx,
            ymax: center.y() + dy,
        };
        if bbox.xmin < -180.0 || bbox.xmax > 180.0 {
            Err(ModelError::InvalidBoundingBox(format!(
                "longitudes [{},{}] not in range [-180,180]",
                bbox.xmin, bbox.xmax
            )))
        } else if bbox.ymin < -90.0 || bbox.ymax > 90.0 {
            Err(ModelError::InvalidBoundingBox(format!(
                "latitudes [{},{}] not in range [-90,90]",
                bbox.ymin, bbox.ymax
            )))
        } else {
            Ok(bbox)
        }
    }
}

impl Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{},{}", self.xmin, self.ymin, self.xmax, self.ymax)
    }
}
