//! Lock bracketing for raw surface access.

use surfpix_surface::Surface;

/// Guard that conditionally holds a surface's access lock.
///
/// Acquires on construction when `enabled` and releases on drop, so every
/// exit path out of a pixel operation releases exactly what it acquired.
/// Bounds rejections happen before the guard is constructed and therefore
/// never touch the lock.
pub(crate) struct LockGuard<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
    locked: bool,
}

impl<'a, S: Surface + ?Sized> LockGuard<'a, S> {
    pub(crate) fn acquire(surface: &'a mut S, enabled: bool) -> Self {
        if enabled {
            surface.lock();
        }
        Self {
            surface,
            locked: enabled,
        }
    }

    pub(crate) fn surface(&self) -> &S {
        self.surface
    }

    pub(crate) fn surface_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for LockGuard<'_, S> {
    fn drop(&mut self) {
        if self.locked {
            self.surface.unlock();
        }
    }
}
