//! Scene export for external plotting.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;
use glam::DVec3;
use serde::Serialize;
use thiserror::Error;

use crate::scene::Scene;
use crate::util::Timed;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode scene: {0}")]
    Json(#[from] serde_json::Error),
}

/// Export a scene to a JSON file, gzipped when the path ends in `.gz`.
pub fn export_scene(scene: &Scene, path: &Path) -> Result<(), ExportError> {
    let _t = Timed::info("Export");
    let io_err = |source| ExportError::Io {
        path: path.display().to_string(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let is_gzip = path.extension().map(|ext| ext == "gz").unwrap_or(false);

    if is_gzip {
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
        write_scene(scene, &mut encoder)?;
        encoder.finish().map_err(io_err)?.flush().map_err(io_err)?;
    } else {
        let mut writer = BufWriter::new(file);
        write_scene(scene, &mut writer)?;
        writer.flush().map_err(io_err)?;
    }

    log::info!("exported scene to {}", path.display());
    Ok(())
}

/// Serialize a scene as JSON into `writer`.
pub fn write_scene<W: Write>(scene: &Scene, writer: W) -> Result<(), ExportError> {
    serde_json::to_writer(writer, &SceneExport::from_scene(scene))?;
    Ok(())
}

#[derive(Serialize)]
struct SceneExport<'a> {
    metadata: Metadata<'a>,
    attractor: &'a [DVec3],
    frame: &'a [[DVec3; 2]],
    section: SectionData<'a>,
}

#[derive(Serialize)]
struct Metadata<'a> {
    x_label: &'a str,
    y_label: &'a str,
    z_label: &'a str,
    plane: PlaneData,
    num_samples: usize,
    num_crossings: usize,
    on_plane_samples: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    bounds: Option<[DVec3; 2]>,
}

#[derive(Serialize)]
struct PlaneData {
    a: f64,
    b: f64,
}

#[derive(Serialize)]
struct SectionData<'a> {
    x: &'a [f64],
    z: &'a [f64],
}

impl<'a> SceneExport<'a> {
    fn from_scene(scene: &'a Scene) -> Self {
        Self {
            metadata: Metadata {
                x_label: &scene.view.x_label,
                y_label: &scene.view.y_label,
                z_label: &scene.view.z_label,
                plane: PlaneData {
                    a: scene.view.plane.a,
                    b: scene.view.plane.b,
                },
                num_samples: scene.attractor.len(),
                num_crossings: scene.num_crossings(),
                on_plane_samples: scene.on_plane_samples,
                bounds: scene.bounds.map(|b| [b.min, b.max]),
            },
            attractor: &scene.attractor,
            frame: &scene.frame,
            section: SectionData {
                x: &scene.section.x,
                z: &scene.section.z,
            },
        }
    }
}
