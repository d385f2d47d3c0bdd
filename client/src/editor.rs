//! Update screen workflow: form state, option lists and saving.

use tracing::info;

use shared::{Draft, Identified};

use crate::error::Result;
use crate::form::{FormGroup, FormModel};
use crate::relations::Relationships;
use crate::services::Services;

pub struct EntityEditor<E: FormModel + Relationships> {
    services: Services,
    pub form: FormGroup<E>,
    pub options: E::Options,
    is_saving: bool,
}

impl<E: FormModel + Relationships> EntityEditor<E> {
    /// Opens the editor on a resolved record, or on a blank form when `entity` is `None`.
    pub async fn open(services: Services, entity: Option<E>) -> Result<Self> {
        let options = E::load_options(&services, entity.as_ref()).await?;
        Ok(Self {
            form: FormGroup::create(entity.as_ref()),
            options,
            services,
            is_saving: false,
        })
    }

    pub fn is_saving(&self) -> bool {
        self.is_saving
    }

    /// Updates the record when the form carries an id, creates it otherwise.
    pub async fn save(&mut self) -> Result<E> {
        self.is_saving = true;
        let result = self.submit(false).await;
        self.is_saving = false;
        result
    }

    /// Like [`save`](Self::save) but sends only the fields that are set.
    pub async fn save_partial(&mut self) -> Result<E> {
        self.is_saving = true;
        let result = self.submit(true).await;
        self.is_saving = false;
        result
    }

    async fn submit(&self, partial: bool) -> Result<E> {
        let service = self.services.of::<E>();
        let saved = match self.form.get_model()? {
            Draft::Existing(entity) if partial => service.partial_update(&entity).await?,
            Draft::Existing(entity) => service.update(&entity).await?,
            Draft::New(entity) => service.create(&entity).await?,
        };
        info!(entity = E::NAME, id = saved.identifier(), "Saved");
        Ok(saved)
    }
}
