//! Domain data types

pub mod loan;
pub mod otp;
pub mod profile;

pub use loan::{
    InstallmentStatus, InstallmentView, LoanProgress, LoanRecord, LoanState, PaymentMethod,
    PaymentReceipt,
};
pub use otp::OtpSlot;
pub use profile::{BorrowerProfile, EmploymentInfo, EmploymentType, ProfileDraft, ProfileUpdate};
