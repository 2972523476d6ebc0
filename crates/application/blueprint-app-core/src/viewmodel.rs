use std::collections::BTreeMap;

use crate::domain::AppState;
use blueprint_core::{BlueprintFormat, Page, ParamField};

fn format_size(bytes: usize) -> String {
    let b = bytes as f64;
    const KB: f64 = 1_000.0;
    const MB: f64 = 1_000_000.0;

    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{bytes} B")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavItemVm {
    pub page: Page,
    pub title: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct HeaderVm {
    pub items: Vec<NavItemVm>,
    pub is_busy: bool,
}

pub fn header_vm(state: &AppState) -> HeaderVm {
    HeaderVm {
        items: Page::ALL
            .into_iter()
            .map(|page| NavItemVm {
                page,
                title: page.title(),
                active: state.nav.is_active(page),
            })
            .collect(),
        is_busy: state.conversion.is_running(),
    }
}

#[derive(Debug, Clone)]
pub struct UploadVm {
    pub file_name: String,
    pub format: BlueprintFormat,
    pub size: String,
    pub uploaded_at: String,
}

pub fn upload_vm(state: &AppState) -> Option<UploadVm> {
    state.image.as_ref().map(|img| UploadVm {
        file_name: img.file_name.clone(),
        format: img.format,
        size: format_size(img.size_bytes()),
        uploaded_at: img.uploaded_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    })
}

#[derive(Debug, Clone)]
pub struct ParametersVm {
    pub errors: BTreeMap<ParamField, Vec<String>>,
    pub has_image: bool,
    pub can_generate: bool,
}

impl ParametersVm {
    pub fn field_errors(&self, field: ParamField) -> &[String] {
        self.errors.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }
}

pub fn parameters_vm(state: &AppState) -> ParametersVm {
    let mut errors: BTreeMap<ParamField, Vec<String>> = BTreeMap::new();
    for v in state.params.violations() {
        errors.entry(v.field()).or_default().push(v.to_string());
    }
    let has_image = state.image.is_some();
    ParametersVm {
        can_generate: errors.is_empty() && !state.conversion.is_running(),
        errors,
        has_image,
    }
}

/// What the output page's preview area shows.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputPreviewVm {
    Processing {
        label: String,
        stage: usize,
        stage_count: usize,
        progress: f32,
    },
    Ready {
        file_name: String,
    },
    Failed {
        message: String,
    },
    Placeholder,
}

pub fn output_preview_vm(state: &AppState) -> OutputPreviewVm {
    let c = &state.conversion;
    if c.is_processing {
        OutputPreviewVm::Processing {
            label: c.current_step_label.clone(),
            stage: c.stage_index + 1,
            stage_count: c.stage_count,
            progress: c.progress(),
        }
    } else if c.model_ready {
        OutputPreviewVm::Ready {
            file_name: state
                .image
                .as_ref()
                .map(|i| i.file_name.clone())
                .unwrap_or_default(),
        }
    } else if let Some(message) = &c.error {
        OutputPreviewVm::Failed {
            message: message.clone(),
        }
    } else {
        OutputPreviewVm::Placeholder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::PipelineRunState;
    use blueprint_core::{NumberInput, UploadedImage};

    #[test]
    fn header_marks_exactly_one_active_item() {
        let mut state = AppState::default();
        state.nav.select(Page::Parameters);
        let vm = header_vm(&state);
        let active: Vec<_> = vm.items.iter().filter(|i| i.active).map(|i| i.page).collect();
        assert_eq!(active, vec![Page::Parameters]);
        assert_eq!(vm.items.len(), 5);
    }

    #[test]
    fn preview_prefers_processing_over_ready() {
        let mut state = AppState::default();
        assert_eq!(output_preview_vm(&state), OutputPreviewVm::Placeholder);

        state.conversion = PipelineRunState::starting(uuid::Uuid::new_v4(), 5);
        state.conversion.current_step_label = "Generating depth map...".into();
        state.conversion.stage_index = 1;
        match output_preview_vm(&state) {
            OutputPreviewVm::Processing {
                label,
                stage,
                stage_count,
                ..
            } => {
                assert_eq!(label, "Generating depth map...");
                assert_eq!((stage, stage_count), (2, 5));
            }
            other => panic!("expected Processing, got {other:?}"),
        }

        state.conversion.is_processing = false;
        state.conversion.model_ready = true;
        state.image = Some(UploadedImage::from_bytes("house.pdf", vec![1]).unwrap());
        assert_eq!(
            output_preview_vm(&state),
            OutputPreviewVm::Ready {
                file_name: "house.pdf".into()
            }
        );
    }

    #[test]
    fn parameters_vm_groups_errors_by_field() {
        let mut state = AppState::default();
        state.params = state.params.clone().with_floors(NumberInput::NotANumber);
        let vm = parameters_vm(&state);
        assert!(!vm.can_generate);
        assert_eq!(vm.field_errors(ParamField::Floors).len(), 1);
        assert!(vm.field_errors(ParamField::Length).is_empty());
    }

    #[test]
    fn sizes_are_human_readable() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2_500), "2.5 KB");
        assert_eq!(format_size(3_200_000), "3.2 MB");
    }
}
