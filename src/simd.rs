//! Runtime report of the vector extensions the matrix kernels can dispatch to.

use std::fmt::{self, Display, Formatter};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimdExtension {
    Sse,
    Avx,
    Avx512,
    Neon,
}

impl Display for SimdExtension {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            SimdExtension::Sse => "SSE enabled",
            SimdExtension::Avx => "AVX enabled",
            SimdExtension::Avx512 => "AVX-512 enabled",
            SimdExtension::Neon => "NEON enabled (ARM)",
        };
        f.write_str(label)
    }
}

/// Extensions available on the running CPU, narrowest first.
#[allow(unused_mut)]
pub fn detected_extensions() -> Vec<SimdExtension> {
    let mut found = Vec::new();

    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        if std::is_x86_feature_detected!("sse") {
            found.push(SimdExtension::Sse);
        }
        if std::is_x86_feature_detected!("avx") {
            found.push(SimdExtension::Avx);
        }
        if std::is_x86_feature_detected!("avx512f") {
            found.push(SimdExtension::Avx512);
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        if std::arch::is_aarch64_feature_detected!("neon") {
            found.push(SimdExtension::Neon);
        }
    }

    found
}

/// One line per detected extension, or a single line saying there are none.
pub fn write_report<W: Write>(out: &mut W, extensions: &[SimdExtension]) -> io::Result<()> {
    if extensions.is_empty() {
        return writeln!(out, "No SIMD vectorization");
    }
    for extension in extensions {
        writeln!(out, "{}", extension)?;
    }
    Ok(())
}
