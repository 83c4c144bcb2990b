//! Simulation creation, destruction, and generation queries.

use log::warn;

use crate::simulation::Simulation;

/// Creates a seeded simulation and returns an opaque pointer.
///
/// # Returns
/// A pointer to a new Simulation, or null if any parameter is invalid.
///
/// # Safety
/// The returned pointer must eventually be freed with `tl_destroy()`.
#[no_mangle]
pub extern "C" fn tl_create(
    width: i32,
    height: i32,
    mod_1: i32,
    mod_2: i32,
    digest_history_retention: i32,
) -> *mut Simulation {
    match Simulation::new(
        width as i64,
        height as i64,
        mod_1 as i64,
        mod_2 as i64,
        digest_history_retention as i64,
    ) {
        Ok(sim) => Box::into_raw(Box::new(sim)),
        Err(err) => {
            warn!("tl_create rejected parameters: {}", err);
            std::ptr::null_mut()
        }
    }
}

/// Creates a simulation with default moduli and retention.
///
/// # Returns
/// A pointer to a new Simulation, or null if the dimensions are invalid.
#[no_mangle]
pub extern "C" fn tl_create_default(width: i32, height: i32) -> *mut Simulation {
    match Simulation::with_dimensions(width as i64, height as i64) {
        Ok(sim) => Box::into_raw(Box::new(sim)),
        Err(err) => {
            warn!("tl_create_default rejected parameters: {}", err);
            std::ptr::null_mut()
        }
    }
}

/// Destroys a simulation and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `tl_create()` /
///   `tl_create_default()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn tl_destroy(ptr: *mut Simulation) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the number of ticks performed so far.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn tl_generation(ptr: *const Simulation) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn test_create_and_destroy() {
        unsafe {
            let sim = tl_create(10, 10, 5, 11, 20);
            assert!(!sim.is_null());

            // Should not crash
            tl_destroy(sim);
        }
    }

    #[test]
    fn test_create_default() {
        unsafe {
            let sim = tl_create_default(7, 3);
            assert!(!sim.is_null());
            assert_eq!((*sim).config().mod_1, 5);
            assert_eq!((*sim).config().mod_2, 11);
            tl_destroy(sim);
        }
    }

    #[test]
    fn test_create_rejects_invalid() {
        assert!(tl_create(0, 10, 5, 11, 20).is_null());
        assert!(tl_create(10, -1, 5, 11, 20).is_null());
        assert!(tl_create(10, 10, 0, 11, 20).is_null());
        assert!(tl_create(10, 10, 5, 11, 0).is_null());
        assert!(tl_create_default(0, 0).is_null());
    }

    #[test]
    fn test_initial_generation() {
        unsafe {
            let sim = tl_create(10, 10, 5, 11, 20);
            assert_eq!(tl_generation(sim), 0);
            tl_destroy(sim);
        }
    }

    #[test]
    fn test_null_handling() {
        unsafe {
            // Should not crash
            tl_destroy(ptr::null_mut());
            assert_eq!(tl_generation(ptr::null()), 0);
        }
    }
}
