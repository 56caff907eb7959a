mod books_crud;
