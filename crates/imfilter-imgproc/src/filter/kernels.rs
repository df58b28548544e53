use std::str::FromStr;
use std::sync::OnceLock;

use super::Kernel;
use crate::error::FilterError;

/// Identity kernel, the center weight is 1.
pub const IDENTITY: [f32; 9] = [0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0];

/// Laplacian-like edge detection kernel.
pub const EDGE: [f32; 9] = [0.0, -1.0, 0.0, -1.0, 4.0, -1.0, 0.0, -1.0, 0.0];

/// Sharpen kernel.
pub const SHARPEN: [f32; 9] = [0.0, -1.0, 0.0, -1.0, 5.0, -1.0, 0.0, -1.0, 0.0];

/// 3x3 box blur kernel, every weight is 1/9.
pub const BOX_BLUR: [f32; 9] = [1.0 / 9.0; 9];

/// 3x3 gaussian blur kernel.
pub const GAUSSIAN_BLUR: [f32; 9] = [
    1.0 / 16.0,
    2.0 / 16.0,
    1.0 / 16.0,
    2.0 / 16.0,
    4.0 / 16.0,
    2.0 / 16.0,
    1.0 / 16.0,
    2.0 / 16.0,
    1.0 / 16.0,
];

/// 5x5 unsharp masking kernel, based on the gaussian blur with amount 1 and threshold 0.
pub const UNSHARP_MASKING: [f32; 25] = [
    -1.0 / 256.0,
    -4.0 / 256.0,
    -6.0 / 256.0,
    -4.0 / 256.0,
    -1.0 / 256.0,
    -4.0 / 256.0,
    -16.0 / 256.0,
    -24.0 / 256.0,
    -16.0 / 256.0,
    -4.0 / 256.0,
    -6.0 / 256.0,
    -24.0 / 256.0,
    476.0 / 256.0,
    -24.0 / 256.0,
    -6.0 / 256.0,
    -4.0 / 256.0,
    -16.0 / 256.0,
    -24.0 / 256.0,
    -16.0 / 256.0,
    -4.0 / 256.0,
    -1.0 / 256.0,
    -4.0 / 256.0,
    -6.0 / 256.0,
    -4.0 / 256.0,
    -1.0 / 256.0,
];

/// The standard filters, each backed by a fixed kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// Leaves the image unchanged.
    Identity,
    /// Edge detection.
    Edge,
    /// Sharpening.
    Sharpen,
    /// 3x3 box blur.
    BoxBlur,
    /// 3x3 gaussian blur.
    GaussianBlur,
    /// 5x5 unsharp masking.
    UnsharpMasking,
}

impl FilterKind {
    /// Every filter, in table order.
    pub const ALL: [FilterKind; 6] = [
        FilterKind::Identity,
        FilterKind::Edge,
        FilterKind::Sharpen,
        FilterKind::BoxBlur,
        FilterKind::GaussianBlur,
        FilterKind::UnsharpMasking,
    ];

    /// The name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            FilterKind::Identity => "identity",
            FilterKind::Edge => "edge",
            FilterKind::Sharpen => "sharpen",
            FilterKind::BoxBlur => "box-blur",
            FilterKind::GaussianBlur => "gaussian-blur",
            FilterKind::UnsharpMasking => "unsharp-masking",
        }
    }

    /// The kernel of the filter, built on first use and shared afterwards.
    pub fn kernel(&self) -> &'static Kernel {
        static KERNELS: OnceLock<[Kernel; 6]> = OnceLock::new();

        let kernels = KERNELS.get_or_init(|| {
            [
                Kernel::from_table(&IDENTITY, 3),
                Kernel::from_table(&EDGE, 3),
                Kernel::from_table(&SHARPEN, 3),
                Kernel::from_table(&BOX_BLUR, 3),
                Kernel::from_table(&GAUSSIAN_BLUR, 3),
                Kernel::from_table(&UNSHARP_MASKING, 5),
            ]
        });

        &kernels[*self as usize]
    }
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterKind {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| FilterError::UnknownFilter(s.to_string()))
    }
}
