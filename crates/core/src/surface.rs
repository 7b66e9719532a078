//! Display surfaces the printer writes to.

use crate::types::{Graphics, Position};

/// Failure to write a cell to a display surface.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("position {0:?} is outside the surface")]
    OutOfSurface(Position),

    #[error("surface write failed")]
    Io(#[from] std::io::Error),
}

/// A character display addressed in grid coordinates.
///
/// Implementations write each cell as it is drawn; `flush` marks the end of a
/// batch of writes.
pub trait Surface {
    fn put(&mut self, position: Position, graphics: Graphics) -> Result<(), SurfaceError>;

    fn flush(&mut self) -> Result<(), SurfaceError> {
        Ok(())
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn put(&mut self, position: Position, graphics: Graphics) -> Result<(), SurfaceError> {
        (**self).put(position, graphics)
    }

    fn flush(&mut self) -> Result<(), SurfaceError> {
        (**self).flush()
    }
}
