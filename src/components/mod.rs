//! UI Components
//!
//! Shared widgets, the page layouts and one component per page.

mod text_field;
mod pager;
mod search_box;
mod confirm;
mod toast_stack;
mod wizard_progress;
mod admin_sidebar;
mod layout;

mod home;
mod apply_wizard;
mod lanyard_wizard;
mod renew_form;
mod partner_directory;
mod contact_form;

mod login;
mod dashboard;
mod applications;
mod application_detail;
mod renewals_admin;
mod donations_admin;
mod contact_admin;
mod partners_admin;
mod activity_log;

pub use text_field::{bind, TextField};
pub use pager::Pager;
pub use search_box::SearchBox;
pub use confirm::{ConfirmModal, DeleteConfirmButton};
pub use toast_stack::ToastStack;
pub use wizard_progress::WizardProgress;
pub use admin_sidebar::AdminSidebar;
pub use layout::{AdminLayout, PublicLayout};

pub use home::HomePage;
pub use apply_wizard::ApplyWizard;
pub use lanyard_wizard::LanyardWizard;
pub use renew_form::RenewForm;
pub use partner_directory::PartnerDirectory;
pub use contact_form::ContactForm;

pub use login::LoginPage;
pub use dashboard::DashboardPage;
pub use applications::ApplicationsPage;
pub use application_detail::ApplicationDetail;
pub use renewals_admin::RenewalsAdminPage;
pub use donations_admin::DonationsAdminPage;
pub use contact_admin::ContactAdminPage;
pub use partners_admin::PartnersAdminPage;
pub use activity_log::ActivityLogPage;
