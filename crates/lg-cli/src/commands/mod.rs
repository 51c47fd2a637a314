pub mod dump;
pub mod events;
pub mod export;
pub mod figure;
pub mod stats;

use std::fs::File;
use std::io::BufReader;
use std::time::Instant;

use lg_core::{Syntax, World};
use tracing::info;

use crate::Source;
use crate::progress::Progress;

/// Open and decode the document named by `source`.
fn load_world(source: &Source) -> Result<World, String> {
    let path = &source.file;
    let syntax = match source.syntax {
        Some(syntax) => syntax,
        None => Syntax::from_path(path).ok_or_else(|| {
            let ext = path
                .extension()
                .map(|e| e.to_string_lossy().into_owned())
                .unwrap_or_default();
            format!(
                "unknown extension \"{ext}\" in \"{}\" (use --syntax xml|json)",
                path.display()
            )
        })?,
    };

    let file = File::open(path)
        .map_err(|e| format!("unable to open file \"{}\": {e}", path.display()))?;
    let size = file
        .metadata()
        .map_err(|e| format!("error getting size of \"{}\": {e}", path.display()))?
        .len();

    let start = Instant::now();
    let mut progress = Progress::new(file, size);
    let world = World::load_syntax(syntax, BufReader::new(&mut progress))
        .map_err(|e| format!("error reading legends file \"{}\": {e}", path.display()))?;

    let elapsed = start.elapsed();
    let secs = elapsed.as_secs().max(1);
    info!(
        ?elapsed,
        bytes = progress.bytes_read(),
        kbps = progress.bytes_read() / 1024 / secs,
        "finished loading {}",
        path.display()
    );
    Ok(world)
}
