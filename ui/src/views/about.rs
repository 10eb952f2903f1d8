use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        section { class: "page page-about",
            h1 { "About" }
            p {
                "Eventboard pulls the current SeatGeek event listing once when the dashboard opens and keeps it in memory. Nothing is stored or cached."
            }

            ul { class: "page-about__notes",
                li { "Total counts every event in the listing, dated or not." }
                li { "Mean date is the average of all event start times." }
                li { "Median date is the middle start time. With an even number of events the later of the two middle dates is shown." }
                li { "Search matches event titles regardless of case. Venue and location must match exactly." }
            }
        }
    }
}
