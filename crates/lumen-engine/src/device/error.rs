use wgpu::SurfaceError;

/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Fatal error (commonly OOM); terminate gracefully.
    Fatal,
}

impl SurfaceErrorAction {
    /// Maps an acquire error to the action the frame loop should take.
    ///
    /// `Reconfigured` means the caller must reconfigure the surface before
    /// the next acquire.
    pub fn for_error(err: &SurfaceError) -> Self {
        match err {
            SurfaceError::Lost | SurfaceError::Outdated => SurfaceErrorAction::Reconfigured,
            SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
            SurfaceError::Timeout | SurfaceError::Other => SurfaceErrorAction::SkipFrame,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use SurfaceErrorAction::{Fatal, Reconfigured, SkipFrame};

    fn action(err: SurfaceError) -> SurfaceErrorAction {
        SurfaceErrorAction::for_error(&err)
    }

    #[test]
    fn lost_and_outdated_reconfigure() {
        assert_eq!(action(SurfaceError::Lost), Reconfigured);
        assert_eq!(action(SurfaceError::Outdated), Reconfigured);
    }

    #[test]
    fn out_of_memory_is_fatal() {
        assert_eq!(action(SurfaceError::OutOfMemory), Fatal);
    }

    #[test]
    fn timeouts_skip_the_frame() {
        assert_eq!(action(SurfaceError::Timeout), SkipFrame);
        assert_eq!(action(SurfaceError::Other), SkipFrame);
    }
}
