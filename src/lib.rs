// Copyright 2026 Routemap Contributors
// SPDX-License-Identifier: Apache-2.0

//! Routemap library — route-driven XML sitemap generation.
//!
//! Handlers register inclusion and media markers into an
//! [`catalog::EndpointCatalog`]; [`sitemap::collect`] turns the catalog into
//! URL records and [`sitemap::render`] serializes them into the namespaced
//! sitemap document. The [`rest`] module serves the result at
//! `/sitemap.xml`.

pub mod catalog;
pub mod cli;
pub mod rest;
pub mod sitemap;
