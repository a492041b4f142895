use anyhow::{Context, Error};
use git2::Signature;

use super::core::DotfileRepo;
use crate::config::Author;

impl DotfileRepo {
    pub(crate) fn create_signature(&self, author: &Author) -> Result<Signature<'static>, Error> {
        Signature::now(&author.name, &author.email).context(format!(
            "Failed to create signature for {} <{}>",
            author.name, author.email
        ))
    }
}
