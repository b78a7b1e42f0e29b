//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::AdminLayout;
use crate::pages::admin::{
    AdminCategories, AdminClientDetail, AdminClients, AdminContracts, AdminDashboard,
    AdminDiscovery, AdminLeads, AdminLogin,
};
use crate::pages::Home;

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},

    #[route("/admin/login")]
    AdminLogin {},

    #[nest("/admin")]
        #[layout(AdminLayout)]
            #[route("/dashboard")]
            AdminDashboard {},

            #[route("/discovery")]
            AdminDiscovery {},

            #[route("/clients")]
            AdminClients {},

            #[route("/clients/:id")]
            AdminClientDetail { id: String },

            #[route("/leads")]
            AdminLeads {},

            #[route("/categories")]
            AdminCategories {},

            #[route("/contracts")]
            AdminContracts {},
        #[end_layout]
    #[end_nest]
}
