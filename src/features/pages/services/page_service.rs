use std::sync::Arc;

use crate::core::error::Result;
use crate::features::cordon_lines::dtos::CordonLineFilters;
use crate::features::cordon_lines::CordonLineService;
use crate::features::outbreaks::dtos::OutbreakFilters;
use crate::features::outbreaks::OutbreakService;
use crate::features::pages::dtos::{ControlMeasuresContext, HomeContext, UpdatesContext};
use crate::features::updates::dtos::UpdateFilters;
use crate::features::updates::models::UpdateType;
use crate::features::updates::UpdateService;
use crate::shared::constants::{HOME_FEATURED_UPDATES, UPDATES_PAGE_LIMIT};

/// Gathers the small record sets shown on the HTML pages
pub struct PageService {
    outbreaks: Arc<OutbreakService>,
    updates: Arc<UpdateService>,
    cordon_lines: Arc<CordonLineService>,
}

impl PageService {
    pub fn new(
        outbreaks: Arc<OutbreakService>,
        updates: Arc<UpdateService>,
        cordon_lines: Arc<CordonLineService>,
    ) -> Self {
        Self {
            outbreaks,
            updates,
            cordon_lines,
        }
    }

    pub async fn home(&self) -> Result<HomeContext> {
        let stats = self
            .outbreaks
            .statistics(&OutbreakFilters::default())
            .await?;
        let featured = self
            .updates
            .list(&UpdateFilters::featured(), Some(HOME_FEATURED_UPDATES))
            .await?;

        Ok(HomeContext::new(&stats, featured))
    }

    pub async fn updates(&self) -> Result<UpdatesContext> {
        let updates = self
            .updates
            .list(&UpdateFilters::default(), Some(UPDATES_PAGE_LIMIT))
            .await?;

        Ok(UpdatesContext {
            updates: updates.into_iter().map(Into::into).collect(),
        })
    }

    pub async fn control_measures(&self) -> Result<ControlMeasuresContext> {
        let guidelines = self
            .updates
            .list(&UpdateFilters::of_type(UpdateType::Guideline), None)
            .await?;
        let cordon_lines = self.cordon_lines.list(&CordonLineFilters::active()).await?;

        Ok(ControlMeasuresContext {
            guidelines: guidelines.into_iter().map(Into::into).collect(),
            cordon_lines: cordon_lines.into_iter().map(Into::into).collect(),
        })
    }
}
