/// products derived from downloaded rasters. names build on the averaged
/// raster name, which records how many rasters were averaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedStage {
    Average,
    IsoContours,
    IsoBands,
    IsoBandsAll,
    IsoBandPolygons(u32),
    SmoothedIsoBands(u32),
    SmoothedIsoBandsCombined,
}

impl DerivedStage {
    /// text following the raster file stem
    pub fn name_ending(&self, num_each_side: u32) -> String {
        let avg = format!("-avg{}", 1 + 2 * num_each_side);
        match self {
            DerivedStage::Average => format!("{avg}.tiff"),
            DerivedStage::IsoContours => format!("{avg}-isocontours.shp"),
            DerivedStage::IsoBands => format!("{avg}-isobands.shp"),
            DerivedStage::IsoBandsAll => format!("{avg}-isobands-all.shp"),
            DerivedStage::IsoBandPolygons(level) => format!("{avg}-isobands-{level}-polys.shp"),
            DerivedStage::SmoothedIsoBands(level) => format!("{avg}-isobands-{level}-smoothed.shp"),
            DerivedStage::SmoothedIsoBandsCombined => format!("{avg}-isobands-smoothed.shp"),
        }
    }
}
