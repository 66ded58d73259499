pub mod amm_router;
