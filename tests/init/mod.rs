mod existing_repository_is_not_reinitialized;
