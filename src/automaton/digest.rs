//! FNV-1a 64-bit digest of a cell buffer.
//!
//! Dimensions are folded in before the cells so that two grids holding the
//! same flat buffer under different shapes hash differently.

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Incremental FNV-1a 64 state.
#[derive(Debug, Clone, Copy)]
pub struct Fnv1a(u64);

impl Default for Fnv1a {
    fn default() -> Self {
        Fnv1a(FNV_OFFSET_BASIS)
    }
}

impl Fnv1a {
    #[inline]
    pub fn write_u8(&mut self, byte: u8) {
        self.0 = (self.0 ^ byte as u64).wrapping_mul(FNV_PRIME);
    }

    pub fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.write_u8(b);
        }
    }

    pub fn finish(self) -> u64 {
        self.0
    }
}

/// FNV-1a over raw bytes.
pub fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hasher = Fnv1a::default();
    hasher.write(bytes);
    hasher.finish()
}

/// Digest of a grid: little-endian width and height, then one byte per cell.
pub fn digest_cells(width: usize, height: usize, cells: &[bool]) -> u64 {
    let mut hasher = Fnv1a::default();
    hasher.write(&(width as u64).to_le_bytes());
    hasher.write(&(height as u64).to_le_bytes());
    for &cell in cells {
        hasher.write_u8(cell as u8);
    }
    hasher.finish()
}
