//! Fixed page header with the site title and portfolio links.

use leptos::prelude::*;

struct PortfolioLink {
	name: &'static str,
	href: &'static str,
	icon: &'static str,
	description: &'static str,
}

const PORTFOLIO_LINKS: &[PortfolioLink] = &[
	PortfolioLink {
		name: "Devs Platform",
		href: "https://www.devsplatform.dev/",
		icon: "💻",
		description: "Developer platform project",
	},
	PortfolioLink {
		name: "Dev Memory",
		href: "https://www.devmemory.dev/",
		icon: "🧠",
		description: "Developer memory service",
	},
	PortfolioLink {
		name: "Edith",
		href: "https://edith-sooty.vercel.app/",
		icon: "🔗",
		description: "RAG-based chatbot project",
	},
];

/// Site title and portfolio links.
#[component]
pub fn Header() -> impl IntoView {
	let links = PORTFOLIO_LINKS
		.iter()
		.map(|link| {
			view! {
				<a
					href=link.href
					target="_blank"
					rel="noopener noreferrer"
					title=link.description
					aria-label=link.name
					class="header-link"
				>
					{link.icon}
				</a>
			}
		})
		.collect_view();

	view! {
		<header class="site-header">
			<div class="site-title">
				<h1>"Baruda"</h1>
				<span class="subtitle">"Personal Knowledge Navigator"</span>
			</div>
			<nav class="header-links">{links}</nav>
		</header>
	}
}
