use crate::error::LayoutError;

/// Virtual address the kernel image is linked above.
pub const KERNEL_BASE: usize = 0xF000_0000;

/// Addresses of the four linker-provided kernel symbols.
///
/// The prompt only reads them; they are fixed for a given kernel image, so
/// every `kernel_info` invocation reports the same values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelLayout {
    kernel_base: usize,
    start_of_kernel: usize,
    end_of_kernel_code_section: usize,
    start_of_uninitialized_data_section: usize,
    end_of_kernel: usize,
}

/// One row of the `kernel_info` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub label: &'static str,
    pub virt: usize,
    pub phys: usize,
}

impl KernelLayout {
    /// Build a layout, checking that the symbols are ordered and above `kernel_base`.
    pub fn new(
        kernel_base: usize,
        start_of_kernel: usize,
        end_of_kernel_code_section: usize,
        start_of_uninitialized_data_section: usize,
        end_of_kernel: usize,
    ) -> Result<Self, LayoutError> {
        let named = [
            ("start_of_kernel", start_of_kernel),
            ("end_of_kernel_code_section", end_of_kernel_code_section),
            (
                "start_of_uninitialized_data_section",
                start_of_uninitialized_data_section,
            ),
            ("end_of_kernel", end_of_kernel),
        ];
        for (name, addr) in named {
            if addr < kernel_base {
                return Err(LayoutError::BelowBase {
                    name,
                    addr,
                    base: kernel_base,
                });
            }
        }
        for pair in named.windows(2) {
            let (previous, previous_addr) = pair[0];
            let (name, addr) = pair[1];
            if addr < previous_addr {
                return Err(LayoutError::OutOfOrder {
                    name,
                    addr,
                    previous,
                    previous_addr,
                });
            }
        }
        Ok(Self {
            kernel_base,
            start_of_kernel,
            end_of_kernel_code_section,
            start_of_uninitialized_data_section,
            end_of_kernel,
        })
    }

    pub fn kernel_base(&self) -> usize {
        self.kernel_base
    }

    /// The symbols in link order with their virtual and physical addresses.
    pub fn symbols(&self) -> [Symbol; 4] {
        let row = |label, virt: usize| Symbol {
            label,
            virt,
            phys: virt - self.kernel_base,
        };
        [
            row("Start Address of the kernel \t\t\t", self.start_of_kernel),
            row("End address of kernel code  \t\t\t", self.end_of_kernel_code_section),
            row(
                "Start addr. of uninitialized data section \t",
                self.start_of_uninitialized_data_section,
            ),
            row("End address of the kernel   \t\t\t", self.end_of_kernel),
        ]
    }

    /// Size of the loaded image in KiB, rounded up.
    pub fn footprint_kb(&self) -> usize {
        (self.end_of_kernel - self.start_of_kernel).div_ceil(1024)
    }
}

impl Default for KernelLayout {
    /// The layout of the stock FOS kernel image.
    fn default() -> Self {
        Self {
            kernel_base: KERNEL_BASE,
            start_of_kernel: 0xF010_000C,
            end_of_kernel_code_section: 0xF010_5C2D,
            start_of_uninitialized_data_section: 0xF011_7300,
            end_of_kernel: 0xF011_8A50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_footprint() {
        let layout = KernelLayout::default();
        assert_eq!(layout.footprint_kb(), 99);
        assert_eq!(layout.symbols()[0].phys, 0x0010_000C);
    }

    #[test]
    fn test_footprint_rounds_up() {
        let layout = KernelLayout::new(0, 0, 10, 20, 1025).unwrap();
        assert_eq!(layout.footprint_kb(), 2);
        let layout = KernelLayout::new(0, 0, 10, 20, 1024).unwrap();
        assert_eq!(layout.footprint_kb(), 1);
    }

    #[test]
    fn test_rejects_symbols_out_of_order() {
        let err = KernelLayout::new(0, 100, 50, 200, 300).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::OutOfOrder {
                name: "end_of_kernel_code_section",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_symbol_below_base() {
        let err = KernelLayout::new(0x1000, 0x800, 0x1100, 0x1200, 0x1300).unwrap_err();
        assert!(matches!(err, LayoutError::BelowBase { name: "start_of_kernel", .. }));
    }
}
