use dioxus::prelude::*;

use crate::client::{
    component::{Breadcrumbs, Header, Toasts},
    router::Route,
};

#[component]
pub fn Layout() -> Element {
    rsx!(div {
        Header {  }
        Breadcrumbs {  }
        Outlet::<Route> {}
        Toasts {  }
    })
}
