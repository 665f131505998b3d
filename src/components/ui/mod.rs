mod access_denied;
mod alert;
mod button;
mod qr_code;
mod spinner;

pub(crate) use access_denied::AccessDenied;
pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::Button;
pub(crate) use qr_code::QrCode;
pub(crate) use spinner::Spinner;
