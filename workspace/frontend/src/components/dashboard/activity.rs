use model::ActivityEntry;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub entries: Vec<ActivityEntry>,
}

#[function_component(RecentActivity)]
pub fn recent_activity(props: &Props) -> Html {
    html! {
        <div class="space-y-4">
            { for props.entries.iter().enumerate().map(|(index, entry)| html! {
                <div key={index} class="flex items-center justify-between p-4 rounded-lg bg-base-200 hover:bg-base-300 transition-colors">
                    <div class="space-y-1">
                        <p class="font-medium">{&entry.customer}</p>
                        <p class="text-sm text-gray-500">{&entry.action}</p>
                    </div>
                    <div class="text-right space-y-1">
                        if let Some(amount) = &entry.amount {
                            <p class="font-semibold">{amount}</p>
                        }
                        <p class="text-sm text-gray-500">{&entry.time}</p>
                    </div>
                </div>
            })}
        </div>
    }
}
