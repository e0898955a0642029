//! Image persistence.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::source::ImageRegion;

/// Destination for extracted page images.
///
/// One save per image region; a failed save is recoverable and must not stop
/// the remaining images on the page.
pub trait ImageSink {
    /// Persist one image region and return the saved path.
    fn save(&self, page: u32, index: usize, region: &ImageRegion) -> Result<PathBuf>;
}

/// Filesystem sink writing `{outdir}/page{N}_img{idx}.png`.
pub struct FsImageSink {
    outdir: PathBuf,
}

impl FsImageSink {
    /// Create the sink, creating the output directory if needed.
    pub fn create<P: AsRef<Path>>(outdir: P) -> Result<Self> {
        let outdir = outdir.as_ref().to_path_buf();
        fs::create_dir_all(&outdir)?;
        Ok(Self { outdir })
    }

    /// The output directory.
    pub fn outdir(&self) -> &Path {
        &self.outdir
    }
}

impl ImageSink for FsImageSink {
    fn save(&self, page: u32, index: usize, region: &ImageRegion) -> Result<PathBuf> {
        if region.data.is_empty() {
            return Err(Error::ImageExtract(format!(
                "page {} image {}: empty image data",
                page, index
            )));
        }

        let path = self.outdir.join(format!("page{}_img{}.png", page, index));
        fs::write(&path, &region.data)
            .map_err(|e| Error::ImageExtract(format!("page {} image {}: {}", page, index, e)))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(data: Vec<u8>) -> ImageRegion {
        ImageRegion {
            x0: 0.0,
            top: 0.0,
            x1: 10.0,
            bottom: 10.0,
            data,
        }
    }

    #[test]
    fn test_save_writes_expected_path() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FsImageSink::create(dir.path()).unwrap();

        let path = sink.save(2, 0, &region(vec![1, 2, 3])).unwrap();
        assert_eq!(path, dir.path().join("page2_img0.png"));
        assert_eq!(fs::read(&path).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_save_rejects_empty_data() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FsImageSink::create(dir.path()).unwrap();

        let result = sink.save(1, 0, &region(Vec::new()));
        assert!(matches!(result, Err(Error::ImageExtract(_))));
    }

    #[test]
    fn test_create_makes_nested_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let sink = FsImageSink::create(&nested).unwrap();
        assert!(sink.outdir().is_dir());
    }
}
