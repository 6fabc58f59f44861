mod catalog;
mod job_record;
mod profile;
mod visa_sponsorship;

pub use catalog::{InvalidRecord, JobCatalog};
pub use job_record::{JobRecord, RecordError};
pub use profile::Profile;
pub use visa_sponsorship::{ParseVisaSponsorshipError, VisaSponsorship};
