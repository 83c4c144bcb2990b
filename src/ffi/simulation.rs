//! Ticking, population queries and text rendering.

use crate::simulation::{Signal, Simulation};

pub const TL_CONTINUE: u8 = 0;
pub const TL_STOP: u8 = 1;

/// Advances the simulation by one generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
///
/// # Returns
/// `TL_CONTINUE` (0) or `TL_STOP` (1). A null handle reports `TL_STOP` so a
/// host loop terminates.
#[no_mangle]
pub unsafe extern "C" fn tl_tick(ptr: *mut Simulation) -> u8 {
    if ptr.is_null() {
        return TL_STOP;
    }

    let sim = &mut *ptr;
    match sim.tick() {
        Signal::Continue => TL_CONTINUE,
        Signal::Stop => TL_STOP,
    }
}

/// Gets the number of live cells in the current generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
///
/// # Returns
/// The live cell count, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn tl_live_cells(ptr: *const Simulation) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).live_cells() as u64
}

/// Gets the byte length of the UTF-8 render of the current generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
///
/// # Returns
/// Bytes needed by `tl_render()`, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn tl_render_len(ptr: *const Simulation) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).render().len() as u64
}

/// Copies the UTF-8 render of the current generation into `out_buf`.
/// No terminating NUL is written.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
/// - `out_buf` must point to at least `capacity` writable bytes, or be null
///
/// # Returns
/// Number of bytes written, or 0 on null pointers or if `capacity` is smaller
/// than `tl_render_len()`.
#[no_mangle]
pub unsafe extern "C" fn tl_render(ptr: *const Simulation, out_buf: *mut u8, capacity: u64) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let text = (*ptr).render();
    let bytes = text.as_bytes();
    if (bytes.len() as u64) > capacity {
        return 0;
    }

    let out_slice = std::slice::from_raw_parts_mut(out_buf, bytes.len());
    out_slice.copy_from_slice(bytes);
    bytes.len() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::lifecycle;
    use std::ptr;

    #[test]
    fn test_tick_advances_generation() {
        unsafe {
            let sim = lifecycle::tl_create(12, 12, 5, 11, 30);
            assert_eq!(lifecycle::tl_generation(sim), 0);

            tl_tick(sim);
            assert_eq!(lifecycle::tl_generation(sim), 1);

            lifecycle::tl_destroy(sim);
        }
    }

    #[test]
    fn test_tick_reports_checkpoint_stop() {
        unsafe {
            let sim = lifecycle::tl_create(12, 12, 1, 1, 30);
            assert_eq!(tl_tick(sim), TL_STOP);
            lifecycle::tl_destroy(sim);
        }
    }

    #[test]
    fn test_render_round_trip() {
        unsafe {
            let sim = lifecycle::tl_create(4, 3, 5, 11, 10);
            let len = tl_render_len(sim);
            // 12 glyphs of 3 bytes each plus 3 newlines
            assert_eq!(len, 39);

            let mut buffer = vec![0u8; len as usize];
            let written = tl_render(sim, buffer.as_mut_ptr(), len);
            assert_eq!(written, len);

            let text = String::from_utf8(buffer).unwrap();
            assert_eq!(text, (*sim).render());

            lifecycle::tl_destroy(sim);
        }
    }

    #[test]
    fn test_render_buffer_too_small() {
        unsafe {
            let sim = lifecycle::tl_create(4, 3, 5, 11, 10);
            let mut buffer = vec![0u8; 8];
            assert_eq!(tl_render(sim, buffer.as_mut_ptr(), 8), 0);
            assert!(buffer.iter().all(|&b| b == 0));
            lifecycle::tl_destroy(sim);
        }
    }

    #[test]
    fn test_live_cells() {
        unsafe {
            let sim = lifecycle::tl_create(4, 3, 5, 11, 10);
            // Seed: indices 0, 2, 4, 6, 7, 8, 10 are alive.
            assert_eq!(tl_live_cells(sim), 7);
            lifecycle::tl_destroy(sim);
        }
    }

    #[test]
    fn test_null_pointer_handling() {
        unsafe {
            assert_eq!(tl_tick(ptr::null_mut()), TL_STOP);
            assert_eq!(tl_live_cells(ptr::null()), 0);
            assert_eq!(tl_render_len(ptr::null()), 0);

            let mut buffer = vec![0u8; 16];
            assert_eq!(tl_render(ptr::null(), buffer.as_mut_ptr(), 16), 0);

            let sim = lifecycle::tl_create(2, 2, 5, 11, 10);
            assert_eq!(tl_render(sim, ptr::null_mut(), 16), 0);
            lifecycle::tl_destroy(sim);
        }
    }
}
