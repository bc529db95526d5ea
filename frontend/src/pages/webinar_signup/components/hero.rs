use crate::components::icons::{CalendarIcon, ClockIcon, CodeIcon, LayoutIcon, MonitorIcon};
use leptos::*;

pub const EVENT_DATE: &str = "Oct 13, 2024";
pub const EVENT_TIME: &str = "4:00 PM - 5:30 PM CST";

#[component]
pub fn WebinarHero() -> impl IntoView {
    view! {
        <div class="grid gap-6 lg:grid-cols-2 lg:gap-12 mb-8 md:mb-12">
            <div class="flex flex-col justify-center space-y-4">
                <div class="space-y-2">
                    <h1 class="text-3xl font-bold tracking-tighter sm:text-5xl xl:text-6xl/none text-blue-600">
                        "Learn HTML & CSS: Build Your First Website!"
                    </h1>
                    <p class="max-w-[600px] text-gray-500 md:text-xl">
                        "Join our fun and interactive webinar to start your journey in web development. Perfect for beginners!"
                    </p>
                </div>
                <div class="flex flex-col gap-2 min-[400px]:flex-row">
                    <div class="flex items-center gap-2">
                        <CalendarIcon class="w-4 h-4 text-blue-500"/>
                        <span class="text-sm">{EVENT_DATE}</span>
                    </div>
                    <div class="flex items-center gap-2">
                        <ClockIcon class="w-4 h-4 text-blue-500"/>
                        <span class="text-sm">{EVENT_TIME}</span>
                    </div>
                </div>
                <ul class="grid gap-2 py-4">
                    <li class="flex items-center gap-2">
                        <LayoutIcon class="w-5 h-5 text-green-500"/>
                        <span>"Learn the basics of HTML structure"</span>
                    </li>
                    <li class="flex items-center gap-2">
                        <MonitorIcon class="w-5 h-5 text-purple-500"/>
                        <span>"Discover how to style with CSS"</span>
                    </li>
                    <li class="flex items-center gap-2">
                        <CodeIcon class="w-5 h-5 text-orange-500"/>
                        <span>"Build a simple webpage during the session"</span>
                    </li>
                </ul>
            </div>
            <div class="flex items-center">
                <div class="w-full relative" style="padding-top: 56.25%">
                    <video
                        class="absolute top-0 left-0 w-full h-full rounded-lg"
                        controls
                        poster="/placeholder.svg?height=400&width=600"
                    >
                        <source src="/media/webinar-intro.mp4" type="video/mp4"/>
                        <track kind="captions" src="/media/webinar-intro.vtt" label="English"/>
                        "Your browser does not support the video tag."
                    </video>
                </div>
            </div>
        </div>
    }
}
