use email_address::EmailAddress;

use crate::modules::contact::application::ports::outgoing::ContactData;

const MIN_NAME_LEN: usize = 2;
const MIN_MESSAGE_LEN: usize = 10;

/// Raw contact-form input before validation.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

/// One generic rejection for the whole form. The public endpoint never
/// tells a caller which field failed.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Invalid contact submission")]
pub struct InvalidSubmission;

impl ContactSubmission {
    /// Checks name length, structural email validity and message length.
    /// Length checks count Unicode scalar values of the input as submitted;
    /// surrounding whitespace counts toward the minimum.
    pub fn validated(self) -> Result<ContactData, InvalidSubmission> {
        if self.name.chars().count() < MIN_NAME_LEN {
            return Err(InvalidSubmission);
        }

        if !EmailAddress::is_valid(self.email.trim()) {
            return Err(InvalidSubmission);
        }

        if self.message.chars().count() < MIN_MESSAGE_LEN {
            return Err(InvalidSubmission);
        }

        Ok(ContactData {
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
        })
    }
}
