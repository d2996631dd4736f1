//! C ABI for embedding the transformer in other languages.
//!
//! Strings returned by [`notbr_process`] are owned by Rust and must be released
//! with [`notbr_free`]. See `include/notbr.h` for the matching header.

use std::ffi::{c_char, c_int, CStr, CString};
use std::ptr;

use crate::error::*;
use crate::markup::OutputType;

pub const NOTBR_HTML: c_int = 1;
pub const NOTBR_MARKDOWN: c_int = 2;
pub const NOTBR_ANSI: c_int = 3;

fn output_type_from(value: c_int) -> Result<OutputType> {
    match value {
        NOTBR_HTML => Ok(OutputType::Html),
        NOTBR_MARKDOWN => Ok(OutputType::Markdown),
        NOTBR_ANSI => Ok(OutputType::Ansi),
        _ => Err(Error::InvalidArgument(format!(
            "unknown output type {}",
            value
        ))),
    }
}

fn process(
    input: &CStr,
    frequency: c_int,
    bold_percentage: c_int,
    output_type: c_int,
) -> Result<CString> {
    let text = input
        .to_str()
        .map_err(|e| Error::InvalidArgument(format!("input is not valid UTF-8 ({})", e)))?;
    let frequency = u64::try_from(frequency)
        .map_err(|_| Error::InvalidArgument(format!("negative frequency {}", frequency)))?;
    if !(0..=100).contains(&bold_percentage) {
        return Err(Error::InvalidArgument(format!(
            "bold percentage has to be in range [0,100], got {}",
            bold_percentage
        )));
    }

    let output = crate::transform(
        text,
        frequency,
        f64::from(bold_percentage) / 100.0,
        output_type_from(output_type)?,
    )?;
    // Output is built from a C string, so it cannot hold interior NULs
    CString::new(output).map_err(|e| Error::Msg(e.to_string()))
}

/// Transforms a NUL-terminated UTF-8 string.
///
/// `bold_percentage` is an integer percent in `[0, 100]` and `output_type` one
/// of `NOTBR_HTML`, `NOTBR_MARKDOWN` or `NOTBR_ANSI`. Returns NULL on error.
///
/// # Safety
/// `input` must be NULL or point to a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn notbr_process(
    input: *const c_char,
    frequency: c_int,
    bold_percentage: c_int,
    output_type: c_int,
) -> *mut c_char {
    if input.is_null() {
        return ptr::null_mut();
    }
    let input = CStr::from_ptr(input);
    match process(input, frequency, bold_percentage, output_type) {
        Ok(output) => output.into_raw(),
        Err(e) => {
            crate::debug!("notbr_process failed: {}", e);
            ptr::null_mut()
        }
    }
}

/// Releases a string returned by [`notbr_process`]. NULL is ignored.
///
/// # Safety
/// `output` must be NULL or a pointer returned by `notbr_process` that was not freed yet.
#[no_mangle]
pub unsafe extern "C" fn notbr_free(output: *mut c_char) {
    if !output.is_null() {
        drop(CString::from_raw(output));
    }
}
