mod hits_presets;
mod json_graphs;
mod pagerank_presets;
mod store_lifecycle;
